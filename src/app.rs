use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze_form))
        .route("/api/day", get(handlers::get_day))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/donate", post(handlers::donate))
        .route("/api/cheer", get(handlers::cheer))
        .with_state(state)
}
