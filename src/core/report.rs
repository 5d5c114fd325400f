use serde::Serialize;

use super::formulas::{
    annual_social_cost, calculate_treats, debt_breakdown, health_status, monthly_essentials,
    motivation, passion_budget_status, project_year_end, survival_status, time_cost,
    trigger_accident,
};
use super::state::LifeState;
use super::types::{
    AccidentKind, AccidentOutcome, DebtBreakdown, HealthStatus, ImpatienceRecord,
    PassionBudgetStatus, SurvivalStatus, TreatReport, YearEndProjection,
};

/// Horizon for the report's projection section, independent of the clock.
pub const REPORT_PROJECTION_MONTHS: u32 = 11;
pub const TIME_COST_REFERENCE_PRICE: f64 = 100_000.0;
const THIN_MONTHLY_NET: f64 = 50_000.0;
const SAMPLE_ACCIDENTS: [AccidentKind; 2] = [AccidentKind::MinorCar, AccidentKind::Hospitalization];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub input: InputEcho,
    pub time_value: TimeValueSection,
    pub debt: DebtBreakdown,
    pub social: SocialSection,
    pub health: HealthStatus,
    pub passion: PassionSection,
    pub accidents: AccidentSection,
    pub survival: SurvivalSection,
    pub projection: YearEndProjection,
    pub cash_flow: CashFlowSection,
    pub rewards: TreatReport,
    pub motivation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEcho {
    pub salary: f64,
    pub work_days: f64,
    pub work_hours: f64,
    pub current_cash: f64,
    pub fixed_costs: f64,
    pub daily_burn_avg: f64,
    pub days_until_payday: f64,
    pub credit_card_debt: f64,
    pub min_pay_rate: f64,
    pub installment_count: usize,
    pub social_events_per_month: f64,
    pub face_tax_per_event: f64,
    pub sleep_hours: f64,
    pub junk_food_meals: f64,
    pub insurance_premium: f64,
    pub insurance_coverage: f64,
    pub insurance_limit: f64,
    pub passion_fund_budget: f64,
    pub stress_level: f64,
    pub savings_target: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeValueSection {
    pub hourly_wage: f64,
    pub days_of_work_per_100k: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSection {
    pub monthly_social_cost: f64,
    pub annual_social_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassionSection {
    #[serde(flatten)]
    pub budget: PassionBudgetStatus,
    pub impatience: ImpatienceRecord,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentSection {
    pub health_penalty_multiplier: f64,
    pub sample_accidents: Vec<AccidentOutcome>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurvivalSection {
    pub net_available_cash: f64,
    pub daily_budget_real: f64,
    pub survival_index: f64,
    pub survival_status: SurvivalStatus,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashFlowTone {
    Negative,
    Thin,
    Healthy,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSection {
    pub salary: f64,
    pub fixed_costs: f64,
    pub debt_commitment: f64,
    pub social_cost: f64,
    pub monthly_essentials: f64,
    pub insurance_premium: f64,
    pub passion_fund_budget: f64,
    pub monthly_net: f64,
    pub tone: CashFlowTone,
}

fn cash_flow_tone(monthly_net: f64) -> CashFlowTone {
    match monthly_net {
        n if n < 0.0 => CashFlowTone::Negative,
        n if n < THIN_MONTHLY_NET => CashFlowTone::Thin,
        _ => CashFlowTone::Healthy,
    }
}

/// Reads the current inputs and computed cache into one nested report.
/// Nothing is recomputed in the pipeline sense; a few presentation values
/// (annual social cost, health and survival status) are derived here.
pub fn full_report(state: &LifeState) -> Report {
    let inputs = state.inputs();
    let computed = state.computed();

    let health = health_status(inputs.sleep_hours, inputs.junk_food_meals);
    let survival = survival_status(computed.survival_index);

    Report {
        input: InputEcho {
            salary: inputs.salary,
            work_days: inputs.work_days,
            work_hours: inputs.work_hours,
            current_cash: inputs.current_cash,
            fixed_costs: inputs.fixed_costs,
            daily_burn_avg: inputs.daily_burn_avg,
            days_until_payday: inputs.days_until_payday,
            credit_card_debt: inputs.credit_card_debt,
            min_pay_rate: inputs.min_pay_rate,
            installment_count: inputs.installments.len(),
            social_events_per_month: inputs.social_events_per_month,
            face_tax_per_event: inputs.face_tax_per_event,
            sleep_hours: inputs.sleep_hours,
            junk_food_meals: inputs.junk_food_meals,
            insurance_premium: inputs.insurance.premium,
            insurance_coverage: inputs.insurance.coverage_fraction,
            insurance_limit: inputs.insurance.per_incident_limit,
            passion_fund_budget: inputs.passion_fund_budget,
            stress_level: inputs.stress_level,
            savings_target: inputs.savings_target,
        },
        time_value: TimeValueSection {
            hourly_wage: computed.hourly_wage,
            days_of_work_per_100k: time_cost(TIME_COST_REFERENCE_PRICE, computed.hourly_wage)
                .map(|cost| cost.days_rounded)
                .unwrap_or(0),
        },
        debt: debt_breakdown(
            inputs.credit_card_debt,
            inputs.min_pay_rate,
            &inputs.installments,
        ),
        social: SocialSection {
            monthly_social_cost: computed.monthly_social_cost,
            annual_social_cost: annual_social_cost(
                inputs.social_events_per_month,
                inputs.face_tax_per_event,
            ),
        },
        health,
        passion: PassionSection {
            budget: passion_budget_status(inputs.passion_fund_budget, computed.monthly_net),
            impatience: computed.impatience.clone(),
        },
        accidents: AccidentSection {
            health_penalty_multiplier: 1.0 + computed.health_penalty_score,
            sample_accidents: SAMPLE_ACCIDENTS
                .iter()
                .map(|&kind| {
                    trigger_accident(kind, computed.health_penalty_score, &inputs.insurance)
                })
                .collect(),
        },
        survival: SurvivalSection {
            net_available_cash: computed.net_available_cash,
            daily_budget_real: computed.daily_budget_real,
            survival_index: computed.survival_index,
            survival_status: survival,
        },
        projection: project_year_end(
            inputs.current_cash,
            computed.monthly_net,
            REPORT_PROJECTION_MONTHS,
        ),
        cash_flow: CashFlowSection {
            salary: inputs.salary,
            fixed_costs: inputs.fixed_costs,
            debt_commitment: computed.monthly_debt_commitment,
            social_cost: computed.monthly_social_cost,
            monthly_essentials: monthly_essentials(inputs.daily_burn_avg),
            insurance_premium: inputs.insurance.premium,
            passion_fund_budget: inputs.passion_fund_budget,
            monthly_net: computed.monthly_net,
            tone: cash_flow_tone(computed.monthly_net),
        },
        rewards: calculate_treats(computed.monthly_net.max(0.0)),
        motivation: motivation(
            survival.status,
            computed.monthly_net,
            health.status,
            computed.debt_freedom_months,
        ),
    }
}
