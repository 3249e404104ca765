//! Error types for the event gateway.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::EventResponse;

/// Caller-visible outcome of a rejected event request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRejection {
    #[error("rate limit exceeded")]
    RateLimited,

    #[error("request body is not valid JSON")]
    InvalidJson,

    #[error("request body failed validation")]
    InvalidBody,

    #[error("request body exceeds the configured limit")]
    BodyTooLarge,

    #[error("internal error")]
    Internal,
}

impl EventRejection {
    /// Machine-readable code returned in the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            EventRejection::RateLimited => "rate_limited",
            EventRejection::InvalidJson => "invalid_json",
            EventRejection::InvalidBody => "invalid_body",
            EventRejection::BodyTooLarge => "body_too_large",
            EventRejection::Internal => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            EventRejection::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            EventRejection::InvalidJson | EventRejection::InvalidBody => StatusCode::BAD_REQUEST,
            EventRejection::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            EventRejection::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EventRejection {
    fn into_response(self) -> Response {
        (self.status(), Json(EventResponse::rejected(self.code()))).into_response()
    }
}

/// Failure while handing an accepted event to the log sink.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),

    /// Destination could not take the event. For sinks that forward to an
    /// external writer or collector.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// Startup and serving errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
