//! Retry schedule for the request loop.

use std::time::Duration;

use crate::ClientOptions;

/// Linear backoff step between attempts.
const BACKOFF_STEP_MS: u64 = 200;

/// Attempt budget and backoff schedule for one logical request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub retries: usize,
    /// Delay unit; the wait after failed attempt `n` is `step × (n + 1)`.
    pub step: Duration,
}

impl RetryPolicy {
    pub fn new(retries: usize) -> Self {
        Self {
            retries,
            step: Duration::from_millis(BACKOFF_STEP_MS),
        }
    }

    /// Total attempts, including the first one.
    pub fn max_attempts(&self) -> usize {
        self.retries.saturating_add(1)
    }

    /// Whether another attempt follows failed attempt `attempt` (0-indexed).
    pub fn has_next(&self, attempt: usize) -> bool {
        attempt < self.retries
    }

    /// Delay to wait after failed attempt `attempt` (0-indexed).
    ///
    /// Equivalently, the delay before attempt `k = attempt + 1` is `step × k`.
    pub fn delay_after(&self, attempt: usize) -> Duration {
        let factor = u32::try_from(attempt.saturating_add(1)).unwrap_or(u32::MAX);
        self.step.saturating_mul(factor)
    }

    /// [`RetryPolicy::delay_after`] in whole milliseconds, saturating at `u64::MAX`.
    pub fn delay_after_ms(&self, attempt: usize) -> u64 {
        u64::try_from(self.delay_after(attempt).as_millis()).unwrap_or(u64::MAX)
    }
}

impl From<&ClientOptions> for RetryPolicy {
    fn from(options: &ClientOptions) -> Self {
        Self::new(options.retries)
    }
}
