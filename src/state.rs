use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::Args;
use crate::rate_limit::RateLimitRegistry;
use crate::sink::{EventSink, sink_for};

// app's shared state
#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: Arc<RateLimitRegistry>,
    pub sink: Arc<dyn EventSink>,
    pub clock: Arc<dyn Clock>,
    pub max_body_bytes: usize, // largest body the event handler reads
}

impl AppState {
    pub fn new(sink: Arc<dyn EventSink>, clock: Arc<dyn Clock>, max_body_bytes: usize) -> Self {
        Self {
            rate_limiter: Arc::new(RateLimitRegistry::new()),
            sink,
            clock,
            max_body_bytes,
        }
    }

    // Production wiring: system clock, sink chosen by environment
    pub fn from_args(args: &Args) -> Self {
        Self::new(
            sink_for(args.is_production()),
            Arc::new(SystemClock),
            args.max_body_bytes,
        )
    }
}
