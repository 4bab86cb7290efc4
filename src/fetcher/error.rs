//! Error types for the fetcher module
//!
//! These never cross the [`Fetcher::fetch`](super::Fetcher::fetch) boundary;
//! they classify a single attempt so the retry policy can decide what to do.

use crate::error::Error as CrateError;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single fetch attempt
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP 429 from the server
    #[error("rate limited (retry after {retry_after:?})")]
    RateLimited {
        /// Delay requested by the server's Retry-After header
        retry_after: Option<Duration>,
    },

    /// HTTP 5xx from the server
    #[error("server error: {0}")]
    Server(u16),

    /// Any other non-200 status
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Connect or read timeout
    #[error("request timed out")]
    Timeout,

    /// Non-retryable transport or client error
    #[error("transport error: {0}")]
    Transport(String),

    /// Content type outside the allow-list
    #[error("unsupported content type: {0}")]
    ContentType(String),

    /// Body exceeded the configured maximum size
    #[error("response too large: {size} bytes (max {max})")]
    TooLarge {
        /// Declared or observed size
        size: u64,
        /// Configured maximum
        max: usize,
    },

    /// The concurrency gate was closed
    #[error("fetcher is shut down")]
    Closed,
}

impl FetchError {
    /// Whether another attempt may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FetchError::RateLimited { .. } | FetchError::Server(_) | FetchError::Timeout
        )
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<FetchError> for CrateError {
    fn from(err: FetchError) -> Self {
        CrateError::Fetch(err.to_string())
    }
}
