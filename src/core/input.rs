use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::types::{Installment, LifeInputs};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("{field} must be a number, got `{raw}`")]
    NotANumber { field: LifeField, raw: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: LifeField },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: LifeField,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("invalid installment: {0}")]
    InvalidInstallment(String),
}

/// Every scalar input that can be read or written by name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LifeField {
    Salary,
    WorkDays,
    WorkHours,
    CurrentCash,
    FixedCosts,
    DailyBurnAvg,
    DaysUntilPayday,
    CreditCardDebt,
    MinPayRate,
    SocialEventsPerMonth,
    FaceTaxPerEvent,
    SleepHours,
    JunkFoodMeals,
    InsurancePremium,
    InsuranceCoverage,
    InsuranceLimit,
    PassionFundBudget,
    StressLevel,
    SavingsTarget,
    DreamItemCost,
    CreditInterestRate,
}

impl LifeField {
    pub const ALL: [LifeField; 21] = [
        LifeField::Salary,
        LifeField::WorkDays,
        LifeField::WorkHours,
        LifeField::CurrentCash,
        LifeField::FixedCosts,
        LifeField::DailyBurnAvg,
        LifeField::DaysUntilPayday,
        LifeField::CreditCardDebt,
        LifeField::MinPayRate,
        LifeField::SocialEventsPerMonth,
        LifeField::FaceTaxPerEvent,
        LifeField::SleepHours,
        LifeField::JunkFoodMeals,
        LifeField::InsurancePremium,
        LifeField::InsuranceCoverage,
        LifeField::InsuranceLimit,
        LifeField::PassionFundBudget,
        LifeField::StressLevel,
        LifeField::SavingsTarget,
        LifeField::DreamItemCost,
        LifeField::CreditInterestRate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LifeField::Salary => "salary",
            LifeField::WorkDays => "workDays",
            LifeField::WorkHours => "workHours",
            LifeField::CurrentCash => "currentCash",
            LifeField::FixedCosts => "fixedCosts",
            LifeField::DailyBurnAvg => "dailyBurnAvg",
            LifeField::DaysUntilPayday => "daysUntilPayday",
            LifeField::CreditCardDebt => "creditCardDebt",
            LifeField::MinPayRate => "minPayRate",
            LifeField::SocialEventsPerMonth => "socialEventsPerMonth",
            LifeField::FaceTaxPerEvent => "faceTaxPerEvent",
            LifeField::SleepHours => "sleepHours",
            LifeField::JunkFoodMeals => "junkFoodMeals",
            LifeField::InsurancePremium => "insurancePremium",
            LifeField::InsuranceCoverage => "insuranceCoverage",
            LifeField::InsuranceLimit => "insuranceLimit",
            LifeField::PassionFundBudget => "passionFundBudget",
            LifeField::StressLevel => "stressLevel",
            LifeField::SavingsTarget => "savingsTarget",
            LifeField::DreamItemCost => "dreamItemCost",
            LifeField::CreditInterestRate => "creditInterestRate",
        }
    }

    /// Inclusive bounds accepted for the field.
    pub fn range(self) -> (f64, f64) {
        match self {
            LifeField::CurrentCash => (f64::MIN, f64::MAX),
            LifeField::MinPayRate | LifeField::InsuranceCoverage => (0.0, 1.0),
            LifeField::SleepHours => (0.0, 24.0),
            LifeField::StressLevel => (1.0, 10.0),
            LifeField::Salary
            | LifeField::WorkDays
            | LifeField::WorkHours
            | LifeField::FixedCosts
            | LifeField::DailyBurnAvg
            | LifeField::DaysUntilPayday
            | LifeField::CreditCardDebt
            | LifeField::SocialEventsPerMonth
            | LifeField::FaceTaxPerEvent
            | LifeField::JunkFoodMeals
            | LifeField::InsurancePremium
            | LifeField::InsuranceLimit
            | LifeField::PassionFundBudget
            | LifeField::SavingsTarget
            | LifeField::DreamItemCost
            | LifeField::CreditInterestRate => (0.0, f64::MAX),
        }
    }

    pub fn validate(self, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field: self });
        }
        let (min, max) = self.range();
        if !(min..=max).contains(&value) {
            return Err(InputError::OutOfRange {
                field: self,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Parses raw text from an input control and validates it.
    pub fn parse_value(self, raw: &str) -> Result<f64, InputError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| InputError::NotANumber {
                field: self,
                raw: raw.to_string(),
            })?;
        self.validate(value)
    }
}

impl fmt::Display for LifeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LifeField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifeField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| InputError::UnknownField(s.to_string()))
    }
}

impl LifeInputs {
    pub fn get(&self, field: LifeField) -> f64 {
        match field {
            LifeField::Salary => self.salary,
            LifeField::WorkDays => self.work_days,
            LifeField::WorkHours => self.work_hours,
            LifeField::CurrentCash => self.current_cash,
            LifeField::FixedCosts => self.fixed_costs,
            LifeField::DailyBurnAvg => self.daily_burn_avg,
            LifeField::DaysUntilPayday => self.days_until_payday,
            LifeField::CreditCardDebt => self.credit_card_debt,
            LifeField::MinPayRate => self.min_pay_rate,
            LifeField::SocialEventsPerMonth => self.social_events_per_month,
            LifeField::FaceTaxPerEvent => self.face_tax_per_event,
            LifeField::SleepHours => self.sleep_hours,
            LifeField::JunkFoodMeals => self.junk_food_meals,
            LifeField::InsurancePremium => self.insurance.premium,
            LifeField::InsuranceCoverage => self.insurance.coverage_fraction,
            LifeField::InsuranceLimit => self.insurance.per_incident_limit,
            LifeField::PassionFundBudget => self.passion_fund_budget,
            LifeField::StressLevel => self.stress_level,
            LifeField::SavingsTarget => self.savings_target,
            LifeField::DreamItemCost => self.impatience.dream_item_cost,
            LifeField::CreditInterestRate => self.impatience.credit_interest_rate,
        }
    }

    /// Writes an already validated value.
    pub(crate) fn assign(&mut self, field: LifeField, value: f64) {
        let slot = match field {
            LifeField::Salary => &mut self.salary,
            LifeField::WorkDays => &mut self.work_days,
            LifeField::WorkHours => &mut self.work_hours,
            LifeField::CurrentCash => &mut self.current_cash,
            LifeField::FixedCosts => &mut self.fixed_costs,
            LifeField::DailyBurnAvg => &mut self.daily_burn_avg,
            LifeField::DaysUntilPayday => &mut self.days_until_payday,
            LifeField::CreditCardDebt => &mut self.credit_card_debt,
            LifeField::MinPayRate => &mut self.min_pay_rate,
            LifeField::SocialEventsPerMonth => &mut self.social_events_per_month,
            LifeField::FaceTaxPerEvent => &mut self.face_tax_per_event,
            LifeField::SleepHours => &mut self.sleep_hours,
            LifeField::JunkFoodMeals => &mut self.junk_food_meals,
            LifeField::InsurancePremium => &mut self.insurance.premium,
            LifeField::InsuranceCoverage => &mut self.insurance.coverage_fraction,
            LifeField::InsuranceLimit => &mut self.insurance.per_incident_limit,
            LifeField::PassionFundBudget => &mut self.passion_fund_budget,
            LifeField::StressLevel => &mut self.stress_level,
            LifeField::SavingsTarget => &mut self.savings_target,
            LifeField::DreamItemCost => &mut self.impatience.dream_item_cost,
            LifeField::CreditInterestRate => &mut self.impatience.credit_interest_rate,
        };
        *slot = value;
    }
}

/// Builds an installment from loosely typed input. Months arrive as a float
/// from forms and JSON and must be a whole, non-negative number.
pub fn build_installment(
    name: &str,
    monthly_amount: f64,
    months_left: f64,
) -> Result<Installment, InputError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::InvalidInstallment(
            "name must not be empty".to_string(),
        ));
    }
    if !monthly_amount.is_finite() || monthly_amount < 0.0 {
        return Err(InputError::InvalidInstallment(
            "monthly amount must be a non-negative number".to_string(),
        ));
    }
    if !months_left.is_finite()
        || months_left < 0.0
        || months_left.fract() != 0.0
        || months_left > f64::from(u32::MAX)
    {
        return Err(InputError::InvalidInstallment(
            "months left must be a non-negative whole number".to_string(),
        ));
    }
    Ok(Installment {
        name: name.to_string(),
        monthly_amount,
        months_left: months_left as u32,
    })
}
