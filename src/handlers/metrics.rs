use axum::{extract::State, http::StatusCode};
use tracing::error;

use crate::metrics::{TRACKED_CLIENTS, render};
use crate::state::AppState;

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    TRACKED_CLIENTS.set(state.rate_limiter.len() as i64);
    render().map_err(|e| {
        error!(error = %e, "failed to encode metrics");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
