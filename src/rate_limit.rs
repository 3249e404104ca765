use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

// Fixed window length in milliseconds
pub const WINDOW_MS: i64 = 60_000;
// Requests allowed per identity per window
pub const MAX_PER_WINDOW: u32 = 120;

// Rate limit bucket - tracks requests per client identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitBucket {
    pub count: u32,
    pub window_started_at: i64,
}

impl RateLimitBucket {
    fn fresh(now: i64) -> Self {
        Self {
            count: 1,
            window_started_at: now,
        }
    }

    fn expired(&self, now: i64) -> bool {
        now - self.window_started_at >= WINDOW_MS
    }
}

// Per-identity fixed window registry, shared across requests
#[derive(Debug, Default)]
pub struct RateLimitRegistry {
    buckets: DashMap<String, RateLimitBucket>,
}

impl RateLimitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns true when the request must be rejected. The entry guard holds the
    // shard lock, so the whole check-and-update is atomic per identity.
    pub fn is_rate_limited(&self, identity: &str, now: i64) -> bool {
        match self.buckets.entry(identity.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(RateLimitBucket::fresh(now));
                false
            }
            Entry::Occupied(mut slot) => Self::check(slot.get_mut(), now),
        }
    }

    fn check(bucket: &mut RateLimitBucket, now: i64) -> bool {
        // window expired..? hard reset
        if bucket.expired(now) {
            *bucket = RateLimitBucket::fresh(now);
            return false;
        }

        // over limit, rejected requests do not count
        if bucket.count >= MAX_PER_WINDOW {
            return true;
        }

        bucket.count += 1;
        false
    }

    // Drops buckets whose window has expired. Their next request would reset
    // them anyway, so this only reclaims memory.
    pub fn sweep(&self, now: i64) -> usize {
        let mut removed = 0;
        self.buckets.retain(|_, bucket| {
            let keep = !bucket.expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    pub fn bucket(&self, identity: &str) -> Option<RateLimitBucket> {
        self.buckets.get(identity).map(|b| *b)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
