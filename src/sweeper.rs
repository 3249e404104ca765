use std::sync::Arc;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::metrics::{SWEPT_BUCKETS, TRACKED_CLIENTS};
use crate::rate_limit::RateLimitRegistry;

// One sweep pass, returns how many buckets were dropped
pub fn sweep_once(registry: &RateLimitRegistry, clock: &dyn Clock) -> usize {
    let removed = registry.sweep(clock.now_ms());
    SWEPT_BUCKETS.inc_by(removed as u64);
    TRACKED_CLIENTS.set(registry.len() as i64);
    removed
}

// Background sweeper - drops expired rate limit buckets every interval
pub async fn sweeper(
    registry: Arc<RateLimitRegistry>,
    clock: Arc<dyn Clock>,
    sweep_interval: Duration,
) {
    let mut ticker = interval(sweep_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(interval = ?sweep_interval, "rate limit sweeper started");

    loop {
        ticker.tick().await;

        let removed = sweep_once(&registry, clock.as_ref());
        if removed > 0 {
            debug!(removed, remaining = registry.len(), "swept expired rate limit buckets");
        }
    }
}
