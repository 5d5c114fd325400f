mod formulas;
mod input;
mod pipeline;
mod report;
mod state;
mod types;

pub use formulas::{
    MAX_PAYOFF_MONTHS, accident_catalog, annual_social_cost, calculate_treats,
    credit_card_payoff_months, daily_budget_real, debt_breakdown, debt_freedom_months,
    health_penalty_score, health_status, hourly_wage, impatience_calculator, monthly_debt_commitment,
    monthly_essentials, monthly_net, monthly_social_cost, motivation, passion_budget_status,
    project_year_end, survival_index, survival_status, time_cost, trigger_accident,
};
pub use input::{InputError, LifeField, build_installment};
pub use pipeline::{
    CREDIT_PLAN_MONTHS, Clock, FixedClock, SystemClock, months_remaining_in_year, recalculate,
};
pub use report::{REPORT_PROJECTION_MONTHS, Report, full_report};
pub use state::{AccidentSimulation, LifeState, StateSnapshot};
pub use types::{
    AccidentCatalogEntry, AccidentKind, AccidentOutcome, ComputedCache, DebtBreakdown,
    HealthStatus, HealthTier, ImpatienceInputs, ImpatienceQuote, ImpatienceRecord,
    ImpatienceVerdict, Installment, Insurance, LifeInputs, PassionBudgetStatus, PassionTier,
    ProjectionWarning, Severity, StatusColor, SurvivalStatus, SurvivalTier, TimeCost, Treat,
    TreatCount, TreatReport, Trend, WaitTime, YearEndProjection,
};
