use std::fmt::Debug;

use chrono::Datelike;
use tracing::debug;

use super::formulas::{
    daily_budget_real, debt_freedom_months, health_penalty_score, hourly_wage,
    impatience_calculator, monthly_debt_commitment, monthly_net, monthly_social_cost,
    project_year_end, survival_index, survival_tier,
};
use super::types::{ComputedCache, ImpatienceRecord, LifeInputs};

/// Standard credit plan length used for the impatience quote.
pub const CREDIT_PLAN_MONTHS: u32 = 24;

/// Source of the only time-dependent input: how far into the year we are.
pub trait Clock: Debug + Send + Sync {
    /// Day of the year, 1-based.
    fn day_of_year(&self) -> u32;

    fn months_remaining(&self) -> u32 {
        months_remaining_in_year(self.day_of_year())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn day_of_year(&self) -> u32 {
        chrono::Local::now().ordinal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn day_of_year(&self) -> u32 {
        self.0
    }
}

/// Coarse month count: 30-day blocks left in a 365-day year, rounded up.
pub fn months_remaining_in_year(day_of_year: u32) -> u32 {
    let days_left = 365_i64 - i64::from(day_of_year);
    if days_left <= 0 {
        return 0;
    }
    ((days_left + 29) / 30) as u32
}

/// Derives every computed field from the inputs. Order matters: debt feeds
/// net available cash, which feeds the daily budget and survival index;
/// monthly net is taken from the raw inputs again and then drives the
/// projection and the impatience quote.
pub fn recalculate(inputs: &LifeInputs, months_remaining: u32) -> ComputedCache {
    let wage = hourly_wage(inputs.salary, inputs.work_days, inputs.work_hours);

    let debt_commitment = monthly_debt_commitment(
        inputs.credit_card_debt,
        inputs.min_pay_rate,
        &inputs.installments,
    );
    let debt_months = debt_freedom_months(
        inputs.credit_card_debt,
        inputs.min_pay_rate,
        &inputs.installments,
    );

    let social_cost = monthly_social_cost(inputs.social_events_per_month, inputs.face_tax_per_event);

    let net_available_cash =
        inputs.current_cash - inputs.fixed_costs - debt_commitment - social_cost;
    let daily_budget = daily_budget_real(net_available_cash, inputs.days_until_payday);
    let index = survival_index(daily_budget, inputs.daily_burn_avg);
    let status = survival_tier(index);

    let penalty = health_penalty_score(inputs.sleep_hours, inputs.junk_food_meals);

    let net = monthly_net(
        inputs.salary,
        inputs.fixed_costs,
        debt_commitment,
        social_cost,
        inputs.daily_burn_avg,
        inputs.passion_fund_budget,
        inputs.insurance.premium,
    );
    let projection = project_year_end(inputs.current_cash, net, months_remaining);

    let quote = impatience_calculator(
        inputs.impatience.dream_item_cost,
        net.max(0.0),
        inputs.impatience.credit_interest_rate,
        CREDIT_PLAN_MONTHS,
    );

    debug!(
        hourly_wage = wage,
        debt_commitment,
        debt_months,
        social_cost,
        health_penalty = penalty,
        net_available_cash,
        survival_index = index,
        survival_status = ?status,
        monthly_net = net,
        projected_year_end = projection.projected_year_end,
        trend = ?projection.trend,
        "life metrics updated"
    );

    ComputedCache {
        hourly_wage: wage,
        monthly_debt_commitment: debt_commitment,
        debt_freedom_months: debt_months,
        monthly_social_cost: social_cost,
        health_penalty_score: penalty,
        net_available_cash,
        daily_budget_real: daily_budget,
        survival_index: index,
        survival_status: status,
        monthly_net: net,
        months_remaining,
        projected_year_end: projection.projected_year_end,
        impatience: ImpatienceRecord {
            dream_item_cost: inputs.impatience.dream_item_cost,
            credit_interest_rate: inputs.impatience.credit_interest_rate,
            quote,
        },
    }
}
