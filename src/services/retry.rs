use crate::config::Config;
use crate::models::error::AppError;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Backoff schedule for rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay_ms: u32,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Config::MAX_RETRY_ATTEMPTS,
            initial_delay_ms: 100,
            multiplier: 5,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt (1-based):
    /// 100ms → 500ms → 2500ms → ...
    pub fn delay_after(&self, attempt: u32) -> u32 {
        let exponent = attempt.saturating_sub(1);
        self.multiplier
            .saturating_pow(exponent)
            .saturating_mul(self.initial_delay_ms)
    }
}

/// Retries an async operation while it reports `AppError::RateLimited`.
///
/// All other errors propagate immediately. When the attempts run out the
/// last rate-limit error is returned.
pub async fn retry_with_backoff<F, Fut, T>(mut operation: F, policy: RetryPolicy) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    for attempt in 1..=policy.max_attempts {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(AppError::RateLimited) if attempt < policy.max_attempts => {
                let delay_ms = policy.delay_after(attempt);
                gloo::console::warn!(format!(
                    "Price feed rate limited, retrying in {}ms (attempt {}/{})",
                    delay_ms, attempt, policy.max_attempts
                ));
                TimeoutFuture::new(delay_ms).await;
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::RateLimited)
}
