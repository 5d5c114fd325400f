use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::{Parser, ValueEnum};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::{
    AccidentCatalogEntry, AccidentKind, Clock, FixedClock, InputError, LifeField, LifeInputs,
    LifeState, SystemClock, TimeCost, accident_catalog, full_report, time_cost,
};

type SharedState = Arc<Mutex<LifeState>>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliAccidentKind {
    MinorCar,
    MajorCar,
    Hospitalization,
    Dental,
    PhoneReplacement,
    EmergencyTravel,
}

impl From<CliAccidentKind> for AccidentKind {
    fn from(value: CliAccidentKind) -> Self {
        match value {
            CliAccidentKind::MinorCar => AccidentKind::MinorCar,
            CliAccidentKind::MajorCar => AccidentKind::MajorCar,
            CliAccidentKind::Hospitalization => AccidentKind::Hospitalization,
            CliAccidentKind::Dental => AccidentKind::Dental,
            CliAccidentKind::PhoneReplacement => AccidentKind::PhoneReplacement,
            CliAccidentKind::EmergencyTravel => AccidentKind::EmergencyTravel,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "salaryman",
    about = "Salaryman life simulator: derives survival, debt and year-end metrics from one month of personal finances"
)]
struct Cli {
    #[arg(long, default_value_t = 360_000.0, help = "Monthly salary")]
    salary: f64,
    #[arg(long, default_value_t = 22.0, help = "Working days per month")]
    work_days: f64,
    #[arg(long, default_value_t = 8.0, help = "Hours per working day")]
    work_hours: f64,
    #[arg(
        long,
        default_value_t = 50_000.0,
        allow_negative_numbers = true,
        help = "Cash on hand, may be negative"
    )]
    current_cash: f64,
    #[arg(long, default_value_t = 100_000.0, help = "Rent, utilities and subscriptions per month")]
    fixed_costs: f64,
    #[arg(long, default_value_t = 2_000.0, help = "Essential daily spending")]
    daily_burn_avg: f64,
    #[arg(long, default_value_t = 10.0, help = "Days left until the next salary")]
    days_until_payday: f64,
    #[arg(long, default_value_t = 0.0, help = "Outstanding credit card balance")]
    credit_card_debt: f64,
    #[arg(
        long,
        default_value_t = 10.0,
        help = "Minimum card payment in percent of the balance"
    )]
    min_pay_rate: f64,
    #[arg(
        long = "installment",
        value_name = "NAME:MONTHLY:MONTHS",
        help = "Installment plan, repeatable, e.g. \"iPhone 15:3000:24\""
    )]
    installments: Vec<String>,
    #[arg(long, default_value_t = 2.0, help = "Weddings, parties and dinners per month")]
    social_events_per_month: f64,
    #[arg(long, default_value_t = 8_000.0, help = "Cost per social event")]
    face_tax_per_event: f64,
    #[arg(long, default_value_t = 6.0, help = "Average hours of sleep per night")]
    sleep_hours: f64,
    #[arg(long, default_value_t = 3.0, help = "Junk food meals per week")]
    junk_food_meals: f64,
    #[arg(long, default_value_t = 5_000.0, help = "Monthly insurance premium")]
    insurance_premium: f64,
    #[arg(
        long,
        default_value_t = 80.0,
        help = "Share of an incident the insurer pays, in percent"
    )]
    insurance_coverage: f64,
    #[arg(long, default_value_t = 500_000.0, help = "Maximum insurance payout per incident")]
    insurance_limit: f64,
    #[arg(long, default_value_t = 10_000.0, help = "Monthly budget for hobbies and dreams")]
    passion_fund_budget: f64,
    #[arg(long, default_value_t = 5.0, help = "Stress level from 1 to 10")]
    stress_level: f64,
    #[arg(long, default_value_t = 100_000.0, help = "Target monthly savings")]
    savings_target: f64,
    #[arg(long, default_value_t = 5_000.0, help = "Price of the item you want right now")]
    dream_item_cost: f64,
    #[arg(
        long,
        default_value_t = 16.0,
        help = "Credit interest per month of the plan, in percent"
    )]
    credit_interest_rate: f64,
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..=366),
        help = "Day of the year used for the year-end projection; defaults to today"
    )]
    day_of_year: Option<u32>,
    #[arg(
        long,
        value_enum,
        help = "Simulate an accident instead of printing the full report"
    )]
    accident: Option<CliAccidentKind>,
    #[arg(long, default_value_t = false, help = "Pretty-print the JSON output")]
    pretty: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_installment_arg(raw: &str) -> Result<(String, f64, f64), InputError> {
    let invalid = || {
        InputError::InvalidInstallment(format!(
            "expected NAME:MONTHLY:MONTHS, got `{raw}`"
        ))
    };
    let mut parts = raw.rsplitn(3, ':');
    let months = parts.next().ok_or_else(invalid)?;
    let monthly = parts.next().ok_or_else(invalid)?;
    let name = parts.next().ok_or_else(invalid)?;

    let monthly = monthly.trim().parse::<f64>().map_err(|_| invalid())?;
    let months = months.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok((name.to_string(), monthly, months))
}

fn build_state(cli: &Cli) -> Result<LifeState, InputError> {
    let clock: Arc<dyn Clock> = match cli.day_of_year {
        Some(day) => Arc::new(FixedClock(day)),
        None => Arc::new(SystemClock),
    };
    let mut state = LifeState::with_clock(LifeInputs::default(), clock);

    state.apply(&[
        (LifeField::Salary, cli.salary),
        (LifeField::WorkDays, cli.work_days),
        (LifeField::WorkHours, cli.work_hours),
        (LifeField::CurrentCash, cli.current_cash),
        (LifeField::FixedCosts, cli.fixed_costs),
        (LifeField::DailyBurnAvg, cli.daily_burn_avg),
        (LifeField::DaysUntilPayday, cli.days_until_payday),
        (LifeField::CreditCardDebt, cli.credit_card_debt),
        (LifeField::MinPayRate, cli.min_pay_rate / 100.0),
        (LifeField::SocialEventsPerMonth, cli.social_events_per_month),
        (LifeField::FaceTaxPerEvent, cli.face_tax_per_event),
        (LifeField::SleepHours, cli.sleep_hours),
        (LifeField::JunkFoodMeals, cli.junk_food_meals),
        (LifeField::InsurancePremium, cli.insurance_premium),
        (LifeField::InsuranceCoverage, cli.insurance_coverage / 100.0),
        (LifeField::InsuranceLimit, cli.insurance_limit),
        (LifeField::PassionFundBudget, cli.passion_fund_budget),
        (LifeField::StressLevel, cli.stress_level),
        (LifeField::SavingsTarget, cli.savings_target),
        (LifeField::DreamItemCost, cli.dream_item_cost),
        (LifeField::CreditInterestRate, cli.credit_interest_rate / 100.0),
    ])?;

    for raw in &cli.installments {
        let (name, monthly, months) = parse_installment_arg(raw)?;
        state.add_installment(&name, monthly, months)?;
    }

    Ok(state)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Prints the full report (or one accident simulation) for the state
/// described by the command-line flags.
pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let state = build_state(&cli)?;

    let output = match cli.accident {
        Some(kind) => to_json(&state.simulate_accident(kind.into()), cli.pretty)?,
        None => to_json(&full_report(&state), cli.pretty)?,
    };
    println!("{output}");
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstallmentPayload {
    name: String,
    monthly_amount: f64,
    months_left: f64,
}

#[derive(Debug, Deserialize)]
struct AccidentPayload {
    kind: AccidentKind,
}

#[derive(Debug, Deserialize)]
struct TimeCostQuery {
    price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeCostResponse {
    price: f64,
    hourly_wage: f64,
    time_cost: Option<TimeCost>,
}

#[derive(Debug, Serialize)]
struct CatalogResponse {
    accidents: Vec<AccidentCatalogEntry>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Turns a loosely typed JSON patch into validated field updates. Values may
/// be JSON numbers or numeric strings straight from a form control.
fn updates_from_patch(
    patch: &BTreeMap<String, serde_json::Value>,
) -> Result<Vec<(LifeField, f64)>, InputError> {
    patch
        .iter()
        .map(|(name, value)| {
            let field: LifeField = name.parse()?;
            let value = match value {
                serde_json::Value::Number(number) => {
                    number.as_f64().ok_or_else(|| InputError::NotANumber {
                        field,
                        raw: number.to_string(),
                    })?
                }
                serde_json::Value::String(raw) => field.parse_value(raw)?,
                other => {
                    return Err(InputError::NotANumber {
                        field,
                        raw: other.to_string(),
                    });
                }
            };
            Ok((field, field.validate(value)?))
        })
        .collect()
}

pub fn router(shared: SharedState) -> Router {
    Router::new()
        .route("/api/report", get(report_handler))
        .route("/api/state", get(state_handler).patch(patch_state_handler))
        .route(
            "/api/installments",
            post(add_installment_handler).delete(clear_installments_handler),
        )
        .route("/api/installments/:index", delete(remove_installment_handler))
        .route("/api/reset", post(reset_handler))
        .route(
            "/api/accidents",
            get(accident_catalog_handler).post(simulate_accident_handler),
        )
        .route("/api/time-cost", get(time_cost_handler))
        .fallback(not_found_handler)
        .with_state(shared)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let shared = Arc::new(Mutex::new(LifeState::default()));
    let app = router(shared);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "salaryman HTTP API listening");
    info!("Local access: http://127.0.0.1:{port}/api/report");

    axum::serve(listener, app).await
}

async fn report_handler(State(shared): State<SharedState>) -> Response {
    let state = shared.lock();
    json_response(StatusCode::OK, full_report(&state))
}

async fn state_handler(State(shared): State<SharedState>) -> Response {
    let state = shared.lock();
    json_response(StatusCode::OK, state.snapshot())
}

async fn patch_state_handler(
    State(shared): State<SharedState>,
    Json(patch): Json<BTreeMap<String, serde_json::Value>>,
) -> Response {
    let updates = match updates_from_patch(&patch) {
        Ok(updates) => updates,
        Err(err) => return input_error_response(&err),
    };
    let mut state = shared.lock();
    if let Err(err) = state.apply(&updates) {
        return input_error_response(&err);
    }
    json_response(StatusCode::OK, full_report(&state))
}

async fn add_installment_handler(
    State(shared): State<SharedState>,
    Json(payload): Json<InstallmentPayload>,
) -> Response {
    let mut state = shared.lock();
    if let Err(err) =
        state.add_installment(&payload.name, payload.monthly_amount, payload.months_left)
    {
        return input_error_response(&err);
    }
    json_response(StatusCode::CREATED, full_report(&state))
}

async fn remove_installment_handler(
    State(shared): State<SharedState>,
    Path(index): Path<usize>,
) -> Response {
    let mut state = shared.lock();
    match state.remove_installment(index) {
        Some(_) => json_response(StatusCode::OK, full_report(&state)),
        None => error_response(
            StatusCode::NOT_FOUND,
            &format!("no installment at position {index}"),
        ),
    }
}

async fn clear_installments_handler(State(shared): State<SharedState>) -> Response {
    let mut state = shared.lock();
    state.clear_installments();
    json_response(StatusCode::OK, full_report(&state))
}

async fn reset_handler(State(shared): State<SharedState>) -> Response {
    let mut state = shared.lock();
    state.reset();
    json_response(StatusCode::OK, full_report(&state))
}

async fn accident_catalog_handler() -> Response {
    json_response(
        StatusCode::OK,
        CatalogResponse {
            accidents: accident_catalog(),
        },
    )
}

async fn simulate_accident_handler(
    State(shared): State<SharedState>,
    Json(payload): Json<AccidentPayload>,
) -> Response {
    let state = shared.lock();
    json_response(StatusCode::OK, state.simulate_accident(payload.kind))
}

async fn time_cost_handler(
    State(shared): State<SharedState>,
    Query(query): Query<TimeCostQuery>,
) -> Response {
    if !query.price.is_finite() {
        return error_response(StatusCode::BAD_REQUEST, "price must be a finite number");
    }
    let state = shared.lock();
    let hourly_wage = state.computed().hourly_wage;
    json_response(
        StatusCode::OK,
        TimeCostResponse {
            price: query.price,
            hourly_wage,
            time_cost: time_cost(query.price, hourly_wage),
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn input_error_response(err: &InputError) -> Response {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}
