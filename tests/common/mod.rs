//! Common test utilities for router-level tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, StatusCode},
};
use event_gateway::clock::ManualClock;
use event_gateway::error::SinkError;
use event_gateway::models::{AcceptedEvent, EventResponse};
use event_gateway::sink::EventSink;
use event_gateway::state::AppState;
use event_gateway::{EVENT_PATH, app};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const START_MS: i64 = 1_700_000_000_000;
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Sink that keeps every accepted event in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<AcceptedEvent>>,
}

impl RecordingSink {
    pub fn recorded(&self) -> Vec<AcceptedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &AcceptedEvent) -> Result<(), SinkError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Sink that always fails.
pub struct FailingSink;

impl EventSink for FailingSink {
    fn record(&self, _event: &AcceptedEvent) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("stdout closed".into()))
    }
}

/// Sink that panics on every event.
pub struct PanickingSink;

impl EventSink for PanickingSink {
    fn record(&self, _event: &AcceptedEvent) -> Result<(), SinkError> {
        panic!("sink exploded");
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub sink: Arc<RecordingSink>,
}

/// Creates a router backed by a recording sink and a manual clock.
pub fn test_app() -> TestApp {
    let sink = Arc::new(RecordingSink::default());
    let clock = Arc::new(ManualClock::new(START_MS));
    let state = AppState::new(sink.clone(), clock.clone(), BODY_LIMIT);
    TestApp {
        router: app(state.clone()),
        state,
        clock,
        sink,
    }
}

/// Creates a router with the given sink and a manual clock.
pub fn app_with_sink(sink: Arc<dyn EventSink>) -> Router {
    let clock = Arc::new(ManualClock::new(START_MS));
    app(AppState::new(sink, clock, BODY_LIMIT))
}

/// Builds an event POST from a client address.
pub fn event_request(ip: &str, body: &str) -> axum::extract::Request<Body> {
    axum::extract::Request::builder()
        .method(Method::POST)
        .uri(EVENT_PATH)
        .header("Content-Type", "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Helper to make GET requests.
pub fn get_request(uri: &str) -> axum::extract::Request<Body> {
    axum::extract::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends request and parses the event response.
pub async fn send_event(
    app: &Router,
    request: axum::extract::Request<Body>,
) -> (StatusCode, EventResponse) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: EventResponse = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Failed to parse response: {} - Body: {:?}",
            e,
            String::from_utf8_lossy(&body)
        )
    });
    (status, parsed)
}

/// Sends request and returns raw response body.
pub async fn send_request_raw(
    app: &Router,
    request: axum::extract::Request<Body>,
) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}

pub const VALID_EVENT: &str = r#"{"type":"click","page":"/x","ts":123}"#;
