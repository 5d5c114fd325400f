use serde::{Serialize, Serializer};

pub const DEFAULT_DREAM_ITEM_COST: f64 = 5_000.0;
pub const DEFAULT_CREDIT_INTEREST_RATE: f64 = 0.16;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub name: String,
    pub monthly_amount: f64,
    pub months_left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub premium: f64,
    pub coverage_fraction: f64,
    pub per_incident_limit: f64,
}

impl Default for Insurance {
    fn default() -> Self {
        Self {
            premium: 5_000.0,
            coverage_fraction: 0.8,
            per_incident_limit: 500_000.0,
        }
    }
}

/// The two impatience inputs. They outlive every recompute and are echoed
/// into the computed impatience record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpatienceInputs {
    pub dream_item_cost: f64,
    /// Applied per month of the credit plan.
    pub credit_interest_rate: f64,
}

impl Default for ImpatienceInputs {
    fn default() -> Self {
        Self {
            dream_item_cost: DEFAULT_DREAM_ITEM_COST,
            credit_interest_rate: DEFAULT_CREDIT_INTEREST_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeInputs {
    pub salary: f64,
    pub work_days: f64,
    pub work_hours: f64,

    pub current_cash: f64,
    pub fixed_costs: f64,
    pub daily_burn_avg: f64,
    pub days_until_payday: f64,

    pub credit_card_debt: f64,
    pub min_pay_rate: f64,
    pub installments: Vec<Installment>,

    pub social_events_per_month: f64,
    pub face_tax_per_event: f64,

    pub sleep_hours: f64,
    pub junk_food_meals: f64,
    pub insurance: Insurance,

    pub passion_fund_budget: f64,
    /// Display only; no formula reads it.
    pub stress_level: f64,
    pub savings_target: f64,

    pub impatience: ImpatienceInputs,
}

impl Default for LifeInputs {
    fn default() -> Self {
        Self {
            salary: 360_000.0,
            work_days: 22.0,
            work_hours: 8.0,
            current_cash: 50_000.0,
            fixed_costs: 100_000.0,
            daily_burn_avg: 2_000.0,
            days_until_payday: 10.0,
            credit_card_debt: 0.0,
            min_pay_rate: 0.10,
            installments: Vec::new(),
            social_events_per_month: 2.0,
            face_tax_per_event: 8_000.0,
            sleep_hours: 6.0,
            junk_food_meals: 3.0,
            insurance: Insurance::default(),
            passion_fund_budget: 10_000.0,
            stress_level: 5.0,
            savings_target: 100_000.0,
            impatience: ImpatienceInputs::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedCache {
    pub hourly_wage: f64,
    pub monthly_debt_commitment: f64,
    pub debt_freedom_months: u32,
    pub monthly_social_cost: f64,
    pub health_penalty_score: f64,
    pub net_available_cash: f64,
    pub daily_budget_real: f64,
    pub survival_index: f64,
    pub survival_status: SurvivalTier,
    pub monthly_net: f64,
    pub months_remaining: u32,
    pub projected_year_end: f64,
    pub impatience: ImpatienceRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpatienceRecord {
    pub dream_item_cost: f64,
    pub credit_interest_rate: f64,
    #[serde(flatten)]
    pub quote: ImpatienceQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCost {
    pub price: f64,
    pub hourly_wage: f64,
    pub hours_of_work: f64,
    pub days_of_work: f64,
    pub hours_rounded: i64,
    pub days_rounded: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBreakdown {
    pub credit_card_debt: f64,
    pub credit_card_min_payment: f64,
    pub installment_count: usize,
    pub installment_total: f64,
    pub installment_details: Vec<Installment>,
    pub total_monthly_commitment: f64,
    pub debt_freedom_months: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusColor {
    Green,
    Yellow,
    Orange,
    Red,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthTier {
    Excellent,
    Fair,
    Poor,
    Critical,
}

impl HealthTier {
    pub fn color(self) -> StatusColor {
        match self {
            HealthTier::Excellent => StatusColor::Green,
            HealthTier::Fair => StatusColor::Yellow,
            HealthTier::Poor => StatusColor::Orange,
            HealthTier::Critical => StatusColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthTier,
    pub color: StatusColor,
    pub penalty_score: f64,
}

/// Months needed to save for an item. `Infinite` when nothing can be saved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaitTime {
    Months(f64),
    Infinite,
}

impl WaitTime {
    pub fn months(self) -> Option<f64> {
        match self {
            WaitTime::Months(months) => Some(months),
            WaitTime::Infinite => None,
        }
    }
}

impl Serialize for WaitTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WaitTime::Months(months) => serializer.serialize_f64(*months),
            WaitTime::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpatienceVerdict {
    Acceptable,
    Bad,
    Terrible,
}

impl ImpatienceVerdict {
    pub fn message(self) -> &'static str {
        match self {
            ImpatienceVerdict::Terrible => "TERRIBLE DEAL - Save instead!",
            ImpatienceVerdict::Bad => "Bad deal - Consider saving",
            ImpatienceVerdict::Acceptable => "Acceptable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpatienceQuote {
    pub months_to_pay_if_credit: u32,
    pub saving_capacity: f64,
    pub cost_if_saved: f64,
    pub cost_if_credit: f64,
    pub monthly_payment_if_credit: f64,
    pub stupidity_tax: f64,
    pub stupidity_tax_percent: f64,
    pub time_to_wait_months: WaitTime,
    pub verdict: ImpatienceVerdict,
    pub verdict_message: &'static str,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassionTier {
    Missing,
    Healthy,
    Excessive,
}

impl PassionTier {
    pub fn message(self) -> &'static str {
        match self {
            PassionTier::Missing => "No budget for sanity! Mental health costs",
            PassionTier::Excessive => "High passion budget - prioritize essentials first",
            PassionTier::Healthy => "Healthy passion budget allocation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassionBudgetStatus {
    pub passion_budget: f64,
    pub percent_of_monthly_net: f64,
    pub status: PassionTier,
    pub message: &'static str,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccidentKind {
    MinorCar,
    MajorCar,
    Hospitalization,
    Dental,
    PhoneReplacement,
    EmergencyTravel,
}

impl AccidentKind {
    pub const ALL: [AccidentKind; 6] = [
        AccidentKind::MinorCar,
        AccidentKind::MajorCar,
        AccidentKind::Hospitalization,
        AccidentKind::Dental,
        AccidentKind::PhoneReplacement,
        AccidentKind::EmergencyTravel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AccidentKind::MinorCar => "Minor Car Repair",
            AccidentKind::MajorCar => "Major Car Repair",
            AccidentKind::Hospitalization => "Hospital Visit",
            AccidentKind::Dental => "Dental Emergency",
            AccidentKind::PhoneReplacement => "Phone Replacement",
            AccidentKind::EmergencyTravel => "Emergency Travel",
        }
    }

    pub fn base_cost(self) -> f64 {
        match self {
            AccidentKind::MinorCar => 50_000.0,
            AccidentKind::MajorCar => 200_000.0,
            AccidentKind::Hospitalization => 500_000.0,
            AccidentKind::Dental => 100_000.0,
            AccidentKind::PhoneReplacement => 80_000.0,
            AccidentKind::EmergencyTravel => 300_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentCatalogEntry {
    pub kind: AccidentKind,
    pub name: &'static str,
    pub base_cost: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccidentOutcome {
    pub kind: AccidentKind,
    pub accident_type: &'static str,
    pub base_cost: f64,
    pub health_penalty_multiplier: f64,
    pub cost_after_health: f64,
    pub insurance_coverage_percent: f64,
    pub insured_amount: f64,
    pub out_of_pocket_cost: f64,
    pub severity: Severity,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurvivalTier {
    Danger,
    Tight,
    Safe,
}

impl SurvivalTier {
    pub fn color(self) -> StatusColor {
        match self {
            SurvivalTier::Danger => StatusColor::Red,
            SurvivalTier::Tight => StatusColor::Yellow,
            SurvivalTier::Safe => StatusColor::Green,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SurvivalTier::Danger => "Critical: You're spending more than available. Debt incoming!",
            SurvivalTier::Tight => "Caution: Little buffer. One accident = trouble.",
            SurvivalTier::Safe => "Good: You can cover daily expenses + build buffer.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurvivalStatus {
    pub status: SurvivalTier,
    pub color: StatusColor,
    pub message: &'static str,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Improving,
    Declining,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionWarning {
    Bankrupt { shortfall: f64 },
    LowRunway,
    PositiveTrajectory,
}

impl ProjectionWarning {
    pub fn message(&self) -> String {
        match self {
            ProjectionWarning::Bankrupt { shortfall } => {
                format!("BANKRUPT: You'll owe {} by year-end!", shortfall.round())
            }
            ProjectionWarning::LowRunway => {
                "Low cash runway. Focus on income or cutting costs.".to_string()
            }
            ProjectionWarning::PositiveTrajectory => "Positive trajectory".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearEndProjection {
    pub current_cash: f64,
    pub monthly_net: f64,
    pub months_remaining: u32,
    pub projected_year_end: f64,
    pub trend: Trend,
    pub warning: ProjectionWarning,
    pub warning_message: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Treat {
    Bubbletea,
    Coffee,
    Lunch,
    Movie,
    Massage,
    WeekendTrip,
}

impl Treat {
    pub const ALL: [Treat; 6] = [
        Treat::Bubbletea,
        Treat::Coffee,
        Treat::Lunch,
        Treat::Movie,
        Treat::Massage,
        Treat::WeekendTrip,
    ];

    pub fn price(self) -> f64 {
        match self {
            Treat::Bubbletea => 4_000.0,
            Treat::Coffee => 3_000.0,
            Treat::Lunch => 8_000.0,
            Treat::Movie => 15_000.0,
            Treat::Massage => 30_000.0,
            Treat::WeekendTrip => 100_000.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Treat::Bubbletea => "bubbletea",
            Treat::Coffee => "coffee",
            Treat::Lunch => "lunch",
            Treat::Movie => "movie",
            Treat::Massage => "massage",
            Treat::WeekendTrip => "weekend trip",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatCount {
    pub treat: Treat,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatReport {
    pub savings_amount: f64,
    pub treats: Vec<TreatCount>,
    pub best_treat: Treat,
    pub max_treats: u64,
    pub message: String,
}
