use crate::booster::cheer_up;
use crate::config::Config;
use crate::donations::append_entry;
use crate::errors::{AppError, EMPTY_DONATION_MESSAGE};
use crate::ledger::LedgerError;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, CheerResponse, DateQuery, DayRecord, DaySummary,
    DonateRequest, DonateResponse, SentimentLabel, StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats_at, summarize_day};
use crate::storage::persist_ledger;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Html<String>, AppError> {
    let today = today();
    let date = resolve_date(query.date.as_deref(), &state.config, today)?;
    let counts = select_day(&state, date).await?;
    Ok(Html(render_index(
        &summarize_day(date, counts),
        state.config.min_date,
        today,
    )))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<DaySummary>, AppError> {
    let date = resolve_date(query.date.as_deref(), &state.config, today())?;
    let counts = select_day(&state, date).await?;
    Ok(Json(summarize_day(date, counts)))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let end = resolve_date(query.date.as_deref(), &state.config, today())?;
    let ledger = state.ledger.lock().await;
    Ok(Json(build_stats_at(end, &ledger)))
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let date = resolve_date(payload.date.as_deref(), &state.config, today())?;
    let (sentiment, counts) = record_text(&state, date, &payload.text).await?;
    Ok(Json(AnalyzeResponse {
        date,
        sentiment,
        summary: summarize_day(date, counts),
    }))
}

pub async fn analyze_form(
    State(state): State<AppState>,
    Form(payload): Form<AnalyzeRequest>,
) -> Result<Redirect, AppError> {
    let date = resolve_date(payload.date.as_deref(), &state.config, today())?;
    record_text(&state, date, &payload.text).await?;
    Ok(Redirect::to(&format!("/?date={date}")))
}

pub async fn donate(
    State(state): State<AppState>,
    Json(payload): Json<DonateRequest>,
) -> Result<Json<DonateResponse>, AppError> {
    let trimmed = payload.text.trim();
    if trimmed.is_empty() {
        warn!("rejected blank donation");
        return Err(AppError::bad_request(EMPTY_DONATION_MESSAGE));
    }

    let sentiment = state.classifier.classify(trimmed);
    let _guard = state.donations.lock().await;
    let stored = append_entry(
        &state.config.donations_path,
        &payload.text,
        Local::now(),
        Some(sentiment),
    )
    .await?;
    info!(entries = stored, %sentiment, "stored donation");

    Ok(Json(DonateResponse {
        sentiment,
        message: "Thank you for your contribution! You're helping make mood tracking smarter and kinder.".to_string(),
    }))
}

pub async fn cheer() -> Json<CheerResponse> {
    Json(CheerResponse {
        message: cheer_up().to_string(),
    })
}

/// Makes sure `date` has a record, persisting the ledger if one had to be
/// created. The in-memory ledger only changes once the write succeeded.
async fn select_day(state: &AppState, date: NaiveDate) -> Result<DayRecord, AppError> {
    let mut ledger = state.ledger.lock().await;
    if let Some(counts) = ledger.day(date) {
        return Ok(*counts);
    }

    let mut updated = ledger.clone();
    updated.ensure_day(date);
    persist_ledger(&state.config.ledger_path, &updated).await?;
    *ledger = updated;

    Ok(DayRecord::default())
}

async fn record_text(
    state: &AppState,
    date: NaiveDate,
    text: &str,
) -> Result<(SentimentLabel, DayRecord), AppError> {
    let mut ledger = state.ledger.lock().await;
    let mut updated = ledger.clone();
    let sentiment = match updated.record_text(date, text, state.classifier.as_ref()) {
        Ok(sentiment) => sentiment,
        Err(LedgerError::EmptyText) => {
            warn!(%date, "rejected blank text");
            return Err(LedgerError::EmptyText.into());
        }
        Err(err) => return Err(err.into()),
    };
    persist_ledger(&state.config.ledger_path, &updated).await?;
    *ledger = updated;

    let counts = ledger.day(date).copied().unwrap_or_default();
    info!(%date, %sentiment, total = counts.total(), "recorded sentiment");
    Ok((sentiment, counts))
}

/// Parses an optional `YYYY-MM-DD` value, defaulting to `today`, and checks
/// it lies between the configured minimum date and today.
pub fn resolve_date(
    raw: Option<&str>,
    config: &Config,
    today: NaiveDate,
) -> Result<NaiveDate, AppError> {
    let date = match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<NaiveDate>()
            .map_err(|_| AppError::bad_request(format!("invalid date '{value}', expected YYYY-MM-DD")))?,
        None => today,
    };

    if date < config.min_date || date > today {
        return Err(AppError::bad_request(format!(
            "date must be between {} and {today}",
            config.min_date
        )));
    }
    Ok(date)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
