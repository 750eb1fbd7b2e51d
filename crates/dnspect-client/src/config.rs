//! Lookup client configuration types.

use std::time::Duration;

/// Retry configuration for ownership lookups
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum retry attempts per endpoint (total attempts = retries + 1)
    pub max_retries: u32,

    /// Backoff before the first retry; doubles on each further attempt
    pub initial_backoff: Duration,

    /// Ceiling on any single backoff interval
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(64),
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with the defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(64),
        }
    }

    /// Set maximum retries per endpoint
    #[must_use]
    pub const fn max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    /// Set the initial backoff duration
    #[must_use]
    pub const fn initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the maximum backoff duration
    #[must_use]
    pub const fn max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Exponential backoff for a given attempt: `initial * 2^attempt`, capped
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let backoff = self.initial_backoff.as_millis() as u64 * 2u64.pow(attempt.min(32));
        let max = self.max_backoff.as_millis() as u64;
        Duration::from_millis(backoff.min(max))
    }
}
