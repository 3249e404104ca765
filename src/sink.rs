use std::sync::Arc;

use tracing::info;

use crate::error::SinkError;
use crate::models::AcceptedEvent;

pub const EVENT_TARGET: &str = "first_party_event";

// Destination for accepted events
pub trait EventSink: Send + Sync {
    fn record(&self, event: &AcceptedEvent) -> Result<(), SinkError>;
}

// Writes one structured tracing record per event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &AcceptedEvent) -> Result<(), SinkError> {
        let payload = serde_json::to_string(&event.payload)?;
        info!(
            target: EVENT_TARGET,
            ip = %event.ip,
            event_type = %event.event_type,
            page = %event.page,
            payload = %payload,
            ts = %event.ts,
            "[first_party_event]"
        );
        Ok(())
    }
}

// Discards events, used outside production
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &AcceptedEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

pub fn sink_for(production: bool) -> Arc<dyn EventSink> {
    if production {
        Arc::new(TracingSink)
    } else {
        Arc::new(NoopSink)
    }
}
