use crate::config::AiLimits;
use dashmap::DashMap;
use stack_roast_errors::AppError;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);
const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Clone)]
struct RequestRecord {
    minute_count: u32,
    hour_count: u32,
    minute_start: Instant,
    hour_start: Instant,
}

impl RequestRecord {
    fn new(now: Instant) -> Self {
        Self {
            minute_count: 0,
            hour_count: 0,
            minute_start: now,
            hour_start: now,
        }
    }
}

/// Fixed-window limiter keyed by client address.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<DashMap<String, RequestRecord>>,
    last_cleanup: Arc<Mutex<Instant>>,
    per_minute: u32,
    per_hour: u32,
}

impl RateLimiter {
    pub fn new(per_minute: u32, per_hour: u32) -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(Mutex::new(Instant::now())),
            per_minute,
            per_hour,
        }
    }

    pub fn from_limits(limits: &AiLimits) -> Self {
        Self::new(limits.requests_per_minute, limits.requests_per_hour)
    }

    pub fn check_rate_limit(&self, client: &str) -> Result<(), RateLimitError> {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> Result<(), RateLimitError> {
        self.maybe_cleanup(now);

        let mut record = self
            .requests
            .entry(client.to_string())
            .or_insert_with(|| RequestRecord::new(now));

        if now.duration_since(record.minute_start) >= MINUTE {
            record.minute_count = 0;
            record.minute_start = now;
        }

        if now.duration_since(record.hour_start) >= HOUR {
            record.hour_count = 0;
            record.hour_start = now;
        }

        if record.minute_count >= self.per_minute {
            let wait = MINUTE.saturating_sub(now.duration_since(record.minute_start));
            return Err(RateLimitError::TooManyRequestsPerMinute(wait.as_secs().max(1)));
        }

        if record.hour_count >= self.per_hour {
            let wait = HOUR.saturating_sub(now.duration_since(record.hour_start));
            return Err(RateLimitError::TooManyRequestsPerHour(wait.as_secs().max(1)));
        }

        record.minute_count += 1;
        record.hour_count += 1;

        Ok(())
    }

    fn maybe_cleanup(&self, now: Instant) {
        let mut last_cleanup = self
            .last_cleanup
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if now.duration_since(*last_cleanup) > CLEANUP_INTERVAL {
            self.requests
                .retain(|_, record| now.duration_since(record.hour_start) < HOUR);
            *last_cleanup = now;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateLimitError {
    #[error("Too many requests. Try again in {0} seconds.")]
    TooManyRequestsPerMinute(u64),
    #[error("Hourly limit reached. Try again in {} minutes.", .0.div_ceil(60))]
    TooManyRequestsPerHour(u64),
}

impl From<RateLimitError> for AppError {
    fn from(err: RateLimitError) -> Self {
        AppError::RateLimited(err.to_string())
    }
}
