use lazy_static::lazy_static;
use prometheus::{
    Encoder, Histogram, IntCounter, IntCounterVec, IntGauge, TextEncoder, register_histogram,
    register_int_counter, register_int_counter_vec, register_int_gauge,
};

lazy_static! {
    pub static ref EVENT_REQUESTS: IntCounter =
        register_int_counter!("event_requests_total", "Total event ingestion requests").unwrap();
    pub static ref EVENTS_ACCEPTED: IntCounter =
        register_int_counter!("events_accepted_total", "Events that passed all checks").unwrap();
    pub static ref EVENTS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "events_rejected_total",
        "Rejected events by reason",
        &["reason"]
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "event_request_latency_seconds",
        "Event request latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: IntGauge = register_int_gauge!(
        "rate_limit_tracked_clients",
        "Client identities currently held by the rate limiter"
    )
    .unwrap();
    pub static ref SWEPT_BUCKETS: IntCounter = register_int_counter!(
        "rate_limit_swept_total",
        "Expired rate limit buckets removed by the sweeper"
    )
    .unwrap();
}

// Render the default registry in text exposition format
pub fn render() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
