use super::types::{
    AccidentCatalogEntry, AccidentKind, AccidentOutcome, DebtBreakdown, HealthStatus, HealthTier,
    ImpatienceQuote, ImpatienceVerdict, Installment, Insurance, PassionBudgetStatus, PassionTier,
    ProjectionWarning, Severity, SurvivalStatus, SurvivalTier, TimeCost, Treat, TreatCount,
    TreatReport, Trend, WaitTime, YearEndProjection,
};

pub const HOURS_PER_WORKDAY: f64 = 8.0;
pub const MAX_PAYOFF_MONTHS: u32 = 360;
/// A card balance below one currency unit counts as paid off.
pub const PAID_OFF_BALANCE: f64 = 1.0;
pub const MAX_HEALTH_PENALTY: f64 = 2.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const LOW_RUNWAY_THRESHOLD: f64 = 100_000.0;
pub const STRONG_MONTHLY_NET: f64 = 50_000.0;

// Time value

pub fn hourly_wage(salary: f64, work_days: f64, work_hours: f64) -> f64 {
    if work_days == 0.0 || work_hours == 0.0 {
        return 0.0;
    }
    salary / (work_days * work_hours)
}

/// Labor needed to pay `price`. `None` when the wage is zero.
pub fn time_cost(price: f64, hourly_wage: f64) -> Option<TimeCost> {
    if hourly_wage == 0.0 {
        return None;
    }
    let hours = price / hourly_wage;
    let days = hours / HOURS_PER_WORKDAY;
    Some(TimeCost {
        price,
        hourly_wage,
        hours_of_work: hours,
        days_of_work: days,
        hours_rounded: hours.round() as i64,
        days_rounded: days.round() as i64,
    })
}

// Debt

pub fn installment_total(installments: &[Installment]) -> f64 {
    installments.iter().map(|i| i.monthly_amount).sum()
}

pub fn monthly_debt_commitment(
    credit_card_debt: f64,
    min_pay_rate: f64,
    installments: &[Installment],
) -> f64 {
    installment_total(installments) + credit_card_debt * min_pay_rate
}

/// Months of minimum payments until the card balance is gone. Each month
/// pays `balance * min_pay_rate`, so a balance under geometric decay is
/// only cleared once it drops below `PAID_OFF_BALANCE`.
pub fn credit_card_payoff_months(credit_card_debt: f64, min_pay_rate: f64) -> u32 {
    if credit_card_debt <= 0.0 {
        return 0;
    }
    let mut balance = credit_card_debt;
    let mut months = 0;
    loop {
        balance -= balance * min_pay_rate;
        months += 1;
        if balance < PAID_OFF_BALANCE || months >= MAX_PAYOFF_MONTHS {
            return months;
        }
    }
}

pub fn debt_freedom_months(
    credit_card_debt: f64,
    min_pay_rate: f64,
    installments: &[Installment],
) -> u32 {
    if credit_card_debt == 0.0 && installments.is_empty() {
        return 0;
    }
    let installment_months = installments
        .iter()
        .map(|i| i.months_left)
        .max()
        .unwrap_or(0);
    installment_months.max(credit_card_payoff_months(
        credit_card_debt,
        min_pay_rate,
    ))
}

pub fn debt_breakdown(
    credit_card_debt: f64,
    min_pay_rate: f64,
    installments: &[Installment],
) -> DebtBreakdown {
    DebtBreakdown {
        credit_card_debt,
        credit_card_min_payment: credit_card_debt * min_pay_rate,
        installment_count: installments.len(),
        installment_total: installment_total(installments),
        installment_details: installments.to_vec(),
        total_monthly_commitment: monthly_debt_commitment(
            credit_card_debt,
            min_pay_rate,
            installments,
        ),
        debt_freedom_months: debt_freedom_months(credit_card_debt, min_pay_rate, installments),
    }
}

// Social

pub fn monthly_social_cost(events_per_month: f64, face_tax_per_event: f64) -> f64 {
    events_per_month * face_tax_per_event
}

pub fn annual_social_cost(events_per_month: f64, face_tax_per_event: f64) -> f64 {
    monthly_social_cost(events_per_month, face_tax_per_event) * 12.0
}

// Health

pub fn health_penalty_score(sleep_hours: f64, junk_food_meals: f64) -> f64 {
    let mut penalty = 0.0;
    if sleep_hours < 6.0 {
        penalty += (6.0 - sleep_hours) * 0.2;
    }
    if junk_food_meals > 5.0 {
        penalty += (junk_food_meals - 5.0) * 0.1;
    }
    penalty.min(MAX_HEALTH_PENALTY)
}

pub fn health_tier(penalty: f64) -> HealthTier {
    match penalty {
        p if p > 1.5 => HealthTier::Critical,
        p if p > 1.0 => HealthTier::Poor,
        p if p > 0.5 => HealthTier::Fair,
        _ => HealthTier::Excellent,
    }
}

pub fn health_status(sleep_hours: f64, junk_food_meals: f64) -> HealthStatus {
    let penalty = health_penalty_score(sleep_hours, junk_food_meals);
    let status = health_tier(penalty);
    HealthStatus {
        status,
        color: status.color(),
        penalty_score: penalty,
    }
}

// Passion and impatience

pub fn impatience_verdict(stupidity_tax: f64, cost_if_saved: f64) -> ImpatienceVerdict {
    if stupidity_tax > cost_if_saved * 0.25 {
        ImpatienceVerdict::Terrible
    } else if stupidity_tax > cost_if_saved * 0.1 {
        ImpatienceVerdict::Bad
    } else {
        ImpatienceVerdict::Acceptable
    }
}

/// Buying now on credit versus saving first. Interest is simple and grows
/// linearly with the number of months on the plan.
pub fn impatience_calculator(
    item_cost: f64,
    monthly_saving_capacity: f64,
    monthly_interest_rate: f64,
    months_to_pay_if_credit: u32,
) -> ImpatienceQuote {
    let months = f64::from(months_to_pay_if_credit);
    let cost_if_saved = item_cost;
    let cost_if_credit = item_cost + item_cost * monthly_interest_rate * months;
    let stupidity_tax = cost_if_credit - cost_if_saved;

    let stupidity_tax_percent = if cost_if_saved > 0.0 {
        stupidity_tax / cost_if_saved * 100.0
    } else {
        0.0
    };
    let monthly_payment_if_credit = if months_to_pay_if_credit > 0 {
        cost_if_credit / months
    } else {
        0.0
    };
    let time_to_wait_months = if monthly_saving_capacity > 0.0 {
        WaitTime::Months(item_cost / monthly_saving_capacity)
    } else {
        WaitTime::Infinite
    };
    let verdict = impatience_verdict(stupidity_tax, cost_if_saved);

    ImpatienceQuote {
        months_to_pay_if_credit,
        saving_capacity: monthly_saving_capacity,
        cost_if_saved,
        cost_if_credit,
        monthly_payment_if_credit,
        stupidity_tax,
        stupidity_tax_percent,
        time_to_wait_months,
        verdict,
        verdict_message: verdict.message(),
    }
}

pub fn passion_budget_status(passion_fund_budget: f64, monthly_net: f64) -> PassionBudgetStatus {
    let percent = if monthly_net > 0.0 {
        passion_fund_budget / monthly_net * 100.0
    } else {
        0.0
    };
    let status = match percent {
        p if p == 0.0 => PassionTier::Missing,
        p if p > 10.0 => PassionTier::Excessive,
        _ => PassionTier::Healthy,
    };
    PassionBudgetStatus {
        passion_budget: passion_fund_budget,
        percent_of_monthly_net: percent,
        status,
        message: status.message(),
    }
}

// Accidents and insurance

pub fn accident_catalog() -> Vec<AccidentCatalogEntry> {
    AccidentKind::ALL
        .iter()
        .map(|&kind| AccidentCatalogEntry {
            kind,
            name: kind.name(),
            base_cost: kind.base_cost(),
        })
        .collect()
}

pub fn accident_severity(out_of_pocket: f64) -> Severity {
    match out_of_pocket {
        c if c > 500_000.0 => Severity::Critical,
        c if c > 200_000.0 => Severity::Severe,
        c if c > 50_000.0 => Severity::Moderate,
        _ => Severity::Minor,
    }
}

pub fn trigger_accident(
    kind: AccidentKind,
    health_penalty_score: f64,
    insurance: &Insurance,
) -> AccidentOutcome {
    let base_cost = kind.base_cost();
    let multiplier = 1.0 + health_penalty_score;
    let cost_after_health = base_cost * multiplier;
    let insured_amount =
        (cost_after_health * insurance.coverage_fraction).min(insurance.per_incident_limit);
    let out_of_pocket = cost_after_health - insured_amount;

    AccidentOutcome {
        kind,
        accident_type: kind.name(),
        base_cost,
        health_penalty_multiplier: multiplier,
        cost_after_health,
        insurance_coverage_percent: insurance.coverage_fraction * 100.0,
        insured_amount,
        out_of_pocket_cost: out_of_pocket,
        severity: accident_severity(out_of_pocket),
    }
}

// Survival

pub fn daily_budget_real(net_available_cash: f64, days_until_payday: f64) -> f64 {
    if days_until_payday == 0.0 {
        return 0.0;
    }
    net_available_cash / days_until_payday
}

pub fn survival_index(daily_budget_real: f64, daily_burn_avg: f64) -> f64 {
    if daily_burn_avg == 0.0 {
        return 0.0;
    }
    daily_budget_real / daily_burn_avg
}

pub fn survival_tier(index: f64) -> SurvivalTier {
    match index {
        i if i < 1.0 => SurvivalTier::Danger,
        i if i < 1.3 => SurvivalTier::Tight,
        _ => SurvivalTier::Safe,
    }
}

pub fn survival_status(index: f64) -> SurvivalStatus {
    let status = survival_tier(index);
    SurvivalStatus {
        status,
        color: status.color(),
        message: status.message(),
    }
}

// Projection

pub fn monthly_essentials(daily_burn_avg: f64) -> f64 {
    daily_burn_avg * DAYS_PER_MONTH
}

pub fn monthly_net(
    salary: f64,
    fixed_costs: f64,
    debt_commitment: f64,
    social_cost: f64,
    daily_burn_avg: f64,
    passion_fund_budget: f64,
    insurance_premium: f64,
) -> f64 {
    salary
        - fixed_costs
        - debt_commitment
        - social_cost
        - monthly_essentials(daily_burn_avg)
        - passion_fund_budget
        - insurance_premium
}

pub fn project_year_end(
    current_cash: f64,
    monthly_net: f64,
    months_remaining: u32,
) -> YearEndProjection {
    let projected = current_cash + monthly_net * f64::from(months_remaining);
    let trend = if projected > current_cash {
        Trend::Improving
    } else if projected < current_cash {
        Trend::Declining
    } else {
        Trend::Flat
    };
    let warning = if projected < 0.0 {
        ProjectionWarning::Bankrupt {
            shortfall: -projected,
        }
    } else if projected < LOW_RUNWAY_THRESHOLD {
        ProjectionWarning::LowRunway
    } else {
        ProjectionWarning::PositiveTrajectory
    };
    let warning_message = warning.message();

    YearEndProjection {
        current_cash,
        monthly_net,
        months_remaining,
        projected_year_end: projected,
        trend,
        warning,
        warning_message,
    }
}

// Rewards

pub fn calculate_treats(savings_amount: f64) -> TreatReport {
    let savings = savings_amount.max(0.0);
    let treats: Vec<TreatCount> = Treat::ALL
        .iter()
        .map(|&treat| TreatCount {
            treat,
            count: (savings / treat.price()).floor() as u64,
        })
        .collect();

    let mut best = treats[0];
    for candidate in &treats[1..] {
        if candidate.count > best.count && candidate.count > 0 {
            best = *candidate;
        }
    }

    let message = if best.count == 0 {
        "Keep saving! Every bit counts.".to_string()
    } else {
        format!(
            "You saved enough for {} {}!",
            best.count,
            best.treat.label()
        )
    };

    TreatReport {
        savings_amount,
        treats,
        best_treat: best.treat,
        max_treats: best.count,
        message,
    }
}

pub fn motivation(
    survival: SurvivalTier,
    monthly_net: f64,
    health: HealthTier,
    debt_freedom_months: u32,
) -> String {
    let mut clauses = Vec::new();
    if survival == SurvivalTier::Safe {
        clauses.push("Your cashflow is healthy!");
    }
    if monthly_net > STRONG_MONTHLY_NET {
        clauses.push("Strong savings rate - keep this up!");
    }
    if health == HealthTier::Excellent {
        clauses.push("Your health investments are paying off!");
    }
    if debt_freedom_months == 0 {
        clauses.push("DEBT FREE! Financial freedom is within reach!");
    }

    if clauses.is_empty() {
        "Time to make some changes.".to_string()
    } else {
        clauses.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::StatusColor;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn installment(name: &str, monthly_amount: f64, months_left: u32) -> Installment {
        Installment {
            name: name.to_string(),
            monthly_amount,
            months_left,
        }
    }

    #[test]
    fn hourly_wage_from_default_salary() {
        assert_approx(hourly_wage(360_000.0, 22.0, 8.0), 360_000.0 / 176.0);
        assert!((hourly_wage(360_000.0, 22.0, 8.0) - 2045.45).abs() < 0.01);
    }

    #[test]
    fn hourly_wage_is_zero_without_work_time() {
        assert_eq!(hourly_wage(360_000.0, 0.0, 8.0), 0.0);
        assert_eq!(hourly_wage(360_000.0, 22.0, 0.0), 0.0);
    }

    #[test]
    fn time_cost_converts_price_to_workdays() {
        let cost = time_cost(100_000.0, 2_500.0).expect("non-zero wage");
        assert_approx(cost.hours_of_work, 40.0);
        assert_approx(cost.days_of_work, 5.0);
        assert_eq!(cost.hours_rounded, 40);
        assert_eq!(cost.days_rounded, 5);
    }

    #[test]
    fn time_cost_is_none_for_zero_wage() {
        assert!(time_cost(100_000.0, 0.0).is_none());
    }

    #[test]
    fn debt_commitment_sums_installments_and_card_minimum() {
        let installments = vec![installment("Phone", 3_000.0, 24), installment("Sofa", 5_000.0, 6)];
        assert_approx(
            monthly_debt_commitment(100_000.0, 0.10, &installments),
            3_000.0 + 5_000.0 + 10_000.0,
        );
    }

    #[test]
    fn debt_freedom_is_zero_without_any_debt() {
        assert_eq!(debt_freedom_months(0.0, 0.10, &[]), 0);
        assert_eq!(debt_freedom_months(0.0, 0.0, &[]), 0);
    }

    #[test]
    fn debt_freedom_uses_longest_installment() {
        let installments = vec![installment("Phone", 3_000.0, 24), installment("Sofa", 5_000.0, 6)];
        assert_eq!(debt_freedom_months(0.0, 0.10, &installments), 24);
    }

    #[test]
    fn card_payoff_at_ten_percent_terminates_before_cap() {
        let months = debt_freedom_months(100_000.0, 0.10, &[]);
        assert_eq!(months, 110);
        assert!(months < MAX_PAYOFF_MONTHS);
    }

    #[test]
    fn card_payoff_saturates_at_cap_for_tiny_rates() {
        assert_eq!(debt_freedom_months(100_000.0, 0.0, &[]), MAX_PAYOFF_MONTHS);
        assert_eq!(debt_freedom_months(100_000.0, 0.0001, &[]), MAX_PAYOFF_MONTHS);
    }

    #[test]
    fn card_payoff_in_one_month_at_full_rate() {
        assert_eq!(credit_card_payoff_months(100_000.0, 1.0), 1);
        assert_eq!(credit_card_payoff_months(0.5, 0.10), 1);
    }

    #[test]
    fn card_horizon_wins_over_shorter_installment() {
        let installments = vec![installment("Phone", 3_000.0, 24)];
        assert_eq!(debt_freedom_months(100_000.0, 0.10, &installments), 110);
    }

    #[test]
    fn debt_breakdown_reports_components() {
        let installments = vec![installment("Phone", 3_000.0, 24)];
        let breakdown = debt_breakdown(50_000.0, 0.05, &installments);
        assert_approx(breakdown.credit_card_min_payment, 2_500.0);
        assert_eq!(breakdown.installment_count, 1);
        assert_approx(breakdown.installment_total, 3_000.0);
        assert_approx(breakdown.total_monthly_commitment, 5_500.0);
        assert_eq!(breakdown.installment_details, installments);
    }

    #[test]
    fn social_cost_monthly_and_annual() {
        assert_approx(monthly_social_cost(2.0, 8_000.0), 16_000.0);
        assert_approx(annual_social_cost(2.0, 8_000.0), 192_000.0);
    }

    #[test]
    fn health_penalty_adds_sleep_and_junk_food() {
        assert_approx(health_penalty_score(6.0, 5.0), 0.0);
        assert_approx(health_penalty_score(4.0, 5.0), 0.4);
        assert_approx(health_penalty_score(6.0, 10.0), 0.5);
        assert_approx(health_penalty_score(4.0, 10.0), 0.9);
        assert_approx(health_penalty_score(0.0, 30.0), MAX_HEALTH_PENALTY);
    }

    #[test]
    fn health_tiers_use_strict_thresholds() {
        assert_eq!(health_tier(0.5), HealthTier::Excellent);
        assert_eq!(health_tier(0.51), HealthTier::Fair);
        assert_eq!(health_tier(1.0), HealthTier::Fair);
        assert_eq!(health_tier(1.01), HealthTier::Poor);
        assert_eq!(health_tier(1.5), HealthTier::Poor);
        assert_eq!(health_tier(1.6), HealthTier::Critical);
        assert_eq!(health_status(6.0, 3.0).color, StatusColor::Green);
        assert_eq!(health_status(0.0, 30.0).color, StatusColor::Red);
    }

    #[test]
    fn impatience_uses_simple_interest_over_plan() {
        let quote = impatience_calculator(5_000.0, 169_000.0, 0.16, 24);
        assert_approx(quote.cost_if_saved, 5_000.0);
        assert_approx(quote.cost_if_credit, 24_200.0);
        assert_approx(quote.stupidity_tax, 19_200.0);
        assert_approx(quote.stupidity_tax_percent, 384.0);
        assert_approx(quote.monthly_payment_if_credit, 24_200.0 / 24.0);
        assert_approx(quote.time_to_wait_months.months().expect("finite"), 5_000.0 / 169_000.0);
        assert_eq!(quote.verdict, ImpatienceVerdict::Terrible);
    }

    #[test]
    fn impatience_wait_is_infinite_without_capacity() {
        let quote = impatience_calculator(5_000.0, 0.0, 0.01, 24);
        assert_eq!(quote.time_to_wait_months, WaitTime::Infinite);
        let json = serde_json::to_string(&quote).expect("serialize");
        assert!(json.contains("\"timeToWaitMonths\":\"infinite\""));
    }

    #[test]
    fn impatience_verdict_tiers() {
        assert_eq!(impatience_verdict(250.0, 1_000.0), ImpatienceVerdict::Bad);
        assert_eq!(impatience_verdict(251.0, 1_000.0), ImpatienceVerdict::Terrible);
        assert_eq!(impatience_verdict(100.0, 1_000.0), ImpatienceVerdict::Acceptable);
        assert_eq!(impatience_verdict(101.0, 1_000.0), ImpatienceVerdict::Bad);
    }

    #[test]
    fn free_item_has_no_tax_percent() {
        let quote = impatience_calculator(0.0, 1_000.0, 0.05, 24);
        assert_approx(quote.stupidity_tax_percent, 0.0);
        assert_eq!(quote.verdict, ImpatienceVerdict::Acceptable);
    }

    #[test]
    fn passion_budget_tiers() {
        assert_eq!(passion_budget_status(0.0, 169_000.0).status, PassionTier::Missing);
        assert_eq!(passion_budget_status(10_000.0, -5_000.0).status, PassionTier::Missing);
        assert_eq!(passion_budget_status(10_000.0, 169_000.0).status, PassionTier::Healthy);
        assert_eq!(passion_budget_status(10_000.0, 100_000.0).status, PassionTier::Healthy);
        assert_eq!(passion_budget_status(20_000.0, 100_000.0).status, PassionTier::Excessive);
    }

    #[test]
    fn accident_with_health_penalty_and_insurance() {
        let insurance = Insurance {
            premium: 5_000.0,
            coverage_fraction: 0.8,
            per_incident_limit: 500_000.0,
        };
        let outcome = trigger_accident(AccidentKind::MinorCar, 0.5, &insurance);
        assert_approx(outcome.cost_after_health, 75_000.0);
        assert_approx(outcome.insured_amount, 60_000.0);
        assert_approx(outcome.out_of_pocket_cost, 15_000.0);
        assert_eq!(outcome.severity, Severity::Minor);
    }

    #[test]
    fn accident_insurance_is_capped_per_incident() {
        let insurance = Insurance {
            premium: 5_000.0,
            coverage_fraction: 0.8,
            per_incident_limit: 500_000.0,
        };
        let outcome = trigger_accident(AccidentKind::Hospitalization, 1.0, &insurance);
        assert_approx(outcome.cost_after_health, 1_000_000.0);
        assert_approx(outcome.insured_amount, 500_000.0);
        assert_approx(outcome.out_of_pocket_cost, 500_000.0);
        assert_eq!(outcome.severity, Severity::Severe);
    }

    #[test]
    fn accident_severity_thresholds() {
        assert_eq!(accident_severity(50_000.0), Severity::Minor);
        assert_eq!(accident_severity(50_001.0), Severity::Moderate);
        assert_eq!(accident_severity(200_000.0), Severity::Moderate);
        assert_eq!(accident_severity(200_001.0), Severity::Severe);
        assert_eq!(accident_severity(500_000.0), Severity::Severe);
        assert_eq!(accident_severity(500_001.0), Severity::Critical);
    }

    #[test]
    fn accident_catalog_lists_every_kind_in_order() {
        let catalog = accident_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0].kind, AccidentKind::MinorCar);
        assert_eq!(catalog[0].name, "Minor Car Repair");
        assert_approx(catalog[2].base_cost, 500_000.0);
        assert_eq!(catalog[5].kind, AccidentKind::EmergencyTravel);
    }

    #[test]
    fn survival_guards_zero_divisors() {
        assert_eq!(daily_budget_real(50_000.0, 0.0), 0.0);
        assert_eq!(survival_index(5_000.0, 0.0), 0.0);
        assert_approx(daily_budget_real(50_000.0, 10.0), 5_000.0);
        assert_approx(survival_index(5_000.0, 2_000.0), 2.5);
    }

    #[test]
    fn survival_tier_boundaries_are_exact() {
        assert_eq!(survival_tier(0.999), SurvivalTier::Danger);
        assert_eq!(survival_tier(1.0), SurvivalTier::Tight);
        assert_eq!(survival_tier(1.299), SurvivalTier::Tight);
        assert_eq!(survival_tier(1.3), SurvivalTier::Safe);
        assert_eq!(survival_status(-3.3).color, StatusColor::Red);
    }

    #[test]
    fn monthly_net_deducts_every_outflow() {
        let net = monthly_net(360_000.0, 100_000.0, 0.0, 16_000.0, 2_000.0, 10_000.0, 5_000.0);
        assert_approx(monthly_essentials(2_000.0), 60_000.0);
        assert_approx(net, 169_000.0);
    }

    #[test]
    fn projection_trend_and_warnings() {
        let bankrupt = project_year_end(10_000.0, -20_000.0, 3);
        assert_approx(bankrupt.projected_year_end, -50_000.0);
        assert_eq!(bankrupt.trend, Trend::Declining);
        assert_eq!(
            bankrupt.warning,
            ProjectionWarning::Bankrupt {
                shortfall: 50_000.0
            }
        );
        assert!(bankrupt.warning_message.contains("50000"));

        let low = project_year_end(10_000.0, 10_000.0, 3);
        assert_eq!(low.trend, Trend::Improving);
        assert_eq!(low.warning, ProjectionWarning::LowRunway);

        let flat = project_year_end(200_000.0, 0.0, 11);
        assert_eq!(flat.trend, Trend::Flat);
        assert_eq!(flat.warning, ProjectionWarning::PositiveTrajectory);
    }

    #[test]
    fn treats_pick_highest_count() {
        let report = calculate_treats(169_000.0);
        let counts: Vec<u64> = report.treats.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![42, 56, 21, 11, 5, 1]);
        assert_eq!(report.best_treat, Treat::Coffee);
        assert_eq!(report.max_treats, 56);
        assert_eq!(report.message, "You saved enough for 56 coffee!");
    }

    #[test]
    fn treats_keep_first_on_zero_savings() {
        let report = calculate_treats(0.0);
        assert_eq!(report.best_treat, Treat::Bubbletea);
        assert_eq!(report.max_treats, 0);
        assert_eq!(report.message, "Keep saving! Every bit counts.");
    }

    #[test]
    fn treats_tie_keeps_first_enumerated() {
        // 4000 buys one bubbletea and one coffee; bubbletea is enumerated first.
        let report = calculate_treats(4_000.0);
        assert_eq!(report.best_treat, Treat::Bubbletea);
        assert_eq!(report.max_treats, 1);
    }

    #[test]
    fn motivation_joins_clauses_or_falls_back() {
        let all = motivation(SurvivalTier::Safe, 60_000.0, HealthTier::Excellent, 0);
        assert!(all.starts_with("Your cashflow is healthy!"));
        assert!(all.contains("Strong savings rate"));
        assert!(all.contains("health investments"));
        assert!(all.ends_with("DEBT FREE! Financial freedom is within reach!"));

        let none = motivation(SurvivalTier::Danger, 10_000.0, HealthTier::Poor, 12);
        assert_eq!(none, "Time to make some changes.");
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_health_penalty_is_bounded_and_monotonic(
            sleep_tenths in 0u32..120,
            junk in 0u32..40,
            less_sleep in 0u32..20,
            more_junk in 0u32..10
        ) {
            let sleep = f64::from(sleep_tenths) / 10.0;
            let junk = f64::from(junk);
            let base = health_penalty_score(sleep, junk);
            prop_assert!((0.0..=MAX_HEALTH_PENALTY).contains(&base));

            let tired = health_penalty_score((sleep - f64::from(less_sleep) / 10.0).max(0.0), junk);
            prop_assert!(tired + 1e-12 >= base);

            let greasy = health_penalty_score(sleep, junk + f64::from(more_junk));
            prop_assert!(greasy + 1e-12 >= base);
        }

        #[test]
        fn prop_adding_an_installment_adds_exactly_its_amount(
            card in 0u32..1_000_000,
            rate_bp in 0u32..10_001,
            amounts in proptest::collection::vec(0u32..200_000, 0..6),
            extra in 0u32..200_000
        ) {
            let rate = f64::from(rate_bp) / 10_000.0;
            let mut installments: Vec<Installment> = amounts
                .iter()
                .enumerate()
                .map(|(i, &a)| installment(&format!("item-{i}"), f64::from(a), 12))
                .collect();
            let before = monthly_debt_commitment(f64::from(card), rate, &installments);
            installments.push(installment("extra", f64::from(extra), 3));
            let after = monthly_debt_commitment(f64::from(card), rate, &installments);
            prop_assert!((after - before - f64::from(extra)).abs() < 1e-6);
        }

        #[test]
        fn prop_payoff_never_exceeds_cap(card in 1u32..10_000_000, rate_bp in 0u32..10_001) {
            let months = credit_card_payoff_months(f64::from(card), f64::from(rate_bp) / 10_000.0);
            prop_assert!(months >= 1);
            prop_assert!(months <= MAX_PAYOFF_MONTHS);
        }

        #[test]
        fn prop_zero_months_projection_keeps_cash(cash in -1_000_000i64..1_000_000, net in -500_000i64..500_000) {
            let projection = project_year_end(cash as f64, net as f64, 0);
            prop_assert_eq!(projection.projected_year_end, cash as f64);
            prop_assert_eq!(projection.trend, Trend::Flat);
        }

        #[test]
        fn prop_treat_counts_never_overspend(savings in 0u32..2_000_000) {
            let report = calculate_treats(f64::from(savings));
            for entry in &report.treats {
                prop_assert!(entry.count as f64 * entry.treat.price() <= f64::from(savings));
            }
        }
    }
}
