use axum::{
    Json,
    body::Body,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error};

use crate::error::EventRejection;
use crate::identity::client_identity;
use crate::metrics::{EVENT_REQUESTS, EVENTS_ACCEPTED, EVENTS_REJECTED, REQUEST_LATENCY};
use crate::models::{AcceptedEvent, EventResponse, validate_body};
use crate::state::AppState;

pub async fn event_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    EVENT_REQUESTS.inc();
    let start_time = Instant::now();

    let result = ingest(&state, &headers, body).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    match result {
        Ok(()) => {
            EVENTS_ACCEPTED.inc();
            Json(EventResponse::accepted()).into_response()
        }
        Err(rejection) => {
            EVENTS_REJECTED.with_label_values(&[rejection.code()]).inc();
            rejection.into_response()
        }
    }
}

// Rate limit first, the body is only read once the client has quota
async fn ingest(state: &AppState, headers: &HeaderMap, body: Body) -> Result<(), EventRejection> {
    let now = state.clock.now_ms();
    let ip = client_identity(headers);

    if state.rate_limiter.is_rate_limited(&ip, now) {
        debug!(%ip, "event rejected: rate limited");
        return Err(EventRejection::RateLimited);
    }

    let bytes = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| {
            let e = e.into_inner();
            if e.is::<LengthLimitError>() {
                debug!(%ip, limit = state.max_body_bytes, "event rejected: body too large");
                EventRejection::BodyTooLarge
            } else {
                debug!(%ip, error = %e, "event rejected: unreadable body");
                EventRejection::InvalidJson
            }
        })?;

    let data: Value = serde_json::from_slice(&bytes).map_err(|e| {
        debug!(%ip, error = %e, "event rejected: invalid json");
        EventRejection::InvalidJson
    })?;

    let record = validate_body(&data).ok_or_else(|| {
        debug!(%ip, "event rejected: invalid body");
        EventRejection::InvalidBody
    })?;

    let event = AcceptedEvent::new(ip, record);
    state.sink.record(&event).map_err(|e| {
        error!(error = %e, "failed to record event");
        EventRejection::Internal
    })
}
