use chrono::{DateTime, NaiveDate, Utc};
use stack_roast_errors::AppError;
use std::sync::Mutex;

struct DailyUsage {
    day: NaiveDate,
    requests: u32,
}

/// Process-wide budget of AI requests per UTC day.
pub struct CostTracker {
    daily_limit: u32,
    usage: Mutex<DailyUsage>,
}

impl CostTracker {
    pub fn new(daily_limit: u32) -> Self {
        Self {
            daily_limit,
            usage: Mutex::new(DailyUsage {
                day: Utc::now().date_naive(),
                requests: 0,
            }),
        }
    }

    pub fn check_and_increment(&self) -> Result<(), CostLimitError> {
        self.check_and_increment_at(Utc::now())
    }

    fn check_and_increment_at(&self, now: DateTime<Utc>) -> Result<(), CostLimitError> {
        let mut usage = self.lock();
        Self::maybe_reset_daily(&mut usage, now);

        if usage.requests >= self.daily_limit {
            return Err(CostLimitError::DailyRequestLimitReached);
        }
        usage.requests += 1;
        Ok(())
    }

    pub fn remaining_requests(&self) -> u32 {
        let mut usage = self.lock();
        Self::maybe_reset_daily(&mut usage, Utc::now());
        self.daily_limit.saturating_sub(usage.requests)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DailyUsage> {
        self.usage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn maybe_reset_daily(usage: &mut DailyUsage, now: DateTime<Utc>) {
        let today = now.date_naive();
        if today != usage.day {
            usage.day = today;
            usage.requests = 0;
            tracing::info!("Daily cost tracker reset");
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostLimitError {
    #[error("Daily AI roast limit reached. Try again tomorrow.")]
    DailyRequestLimitReached,
}

impl From<CostLimitError> for AppError {
    fn from(err: CostLimitError) -> Self {
        AppError::RateLimited(err.to_string())
    }
}
