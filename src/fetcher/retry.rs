//! Retry policy for page fetches
//!
//! The policy is a pure state machine: given the attempt that just failed and
//! why, it returns the next [`RetryState`]. The fetcher drives the machine and
//! does the sleeping, so the decision logic is testable without a network.

use std::time::Duration;

use crate::fetcher::config::FetcherConfig;
use crate::fetcher::error::FetchError;

/// Upper bound on a server-requested Retry-After delay
const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// State of a single URL's fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryState {
    /// About to issue attempt number `attempt` (zero-based)
    Attempting { attempt: u32 },

    /// Waiting `delay` before issuing `next_attempt`
    Backoff { next_attempt: u32, delay: Duration },

    /// The page was fetched
    Succeeded,

    /// No further attempts will be made
    FailedTerminal,
}

/// Retry decisions derived from the fetcher configuration
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_base: Duration,
    rate_limit_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_base: Duration, rate_limit_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_base,
            rate_limit_backoff,
        }
    }

    pub fn from_config(config: &FetcherConfig) -> Self {
        Self::new(
            config.max_attempts,
            config.backoff_base(),
            config.rate_limit_backoff(),
        )
    }

    /// Delay before retrying after attempt `attempt` failed with a 5xx or timeout
    pub fn exponential_delay(&self, attempt: u32) -> Duration {
        self.backoff_base
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Next state after attempt `attempt` failed with `error`
    pub fn after_failure(&self, attempt: u32, error: &FetchError) -> RetryState {
        if !error.is_retryable() || attempt + 1 >= self.max_attempts {
            return RetryState::FailedTerminal;
        }

        let delay = match error {
            FetchError::RateLimited { retry_after } => retry_after
                .map(|d| d.min(MAX_RETRY_AFTER))
                .unwrap_or(self.rate_limit_backoff),
            _ => self.exponential_delay(attempt),
        };

        RetryState::Backoff {
            next_attempt: attempt + 1,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&FetcherConfig::default())
    }
}
