//! First-party analytics event ingestion.
//!
//! A single `POST /api/event` endpoint accepts client interaction events,
//! rate limits them per client identity with a fixed 60 second window,
//! validates the payload shape and hands accepted events to a log sink.

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod sink;
pub mod state;
pub mod sweeper;

use std::any::Any;

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::EventRejection;
use crate::handlers::{event_handler, health_handler, metrics_handler};
use crate::models::EventResponse;
use crate::state::AppState;

pub const EVENT_PATH: &str = "/api/event";

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(EVENT_PATH, post(event_handler))
        .route("/metrics", get(metrics_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// A panicking handler still answers with the generic failure body
fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    let rejection = EventRejection::Internal;
    (rejection.status(), Json(EventResponse::rejected(rejection.code()))).into_response()
}
