//! # Fetcher Configuration Module
//!
//! This module provides configuration options for the page fetcher, including
//! the concurrency gate, timeouts, retry policy and response guards. It uses a
//! builder pattern for flexible configuration.
//!
//! ## Key Components
//!
//! - `FetcherConfig`: The main configuration struct with fetcher parameters
//! - `FetcherConfigBuilder`: Builder pattern implementation for easier configuration
//!
//! ## Features
//!
//! - Defaults suitable for polite crawling of conference sites
//! - Separate connect and total request timeouts
//! - Exponential backoff for server errors and timeouts, fixed backoff for 429
//! - Response size and content-type guards

use std::time::Duration;

/// Configuration for the fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User agent to use for requests
    pub user_agent: String,

    /// Maximum number of requests in flight at once
    pub concurrency: usize,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Total per-request timeout in seconds
    pub total_timeout_secs: u64,

    /// Maximum number of attempts per URL, first attempt included
    pub max_attempts: u32,

    /// Base delay in milliseconds for exponential backoff
    pub backoff_base_ms: u64,

    /// Delay in milliseconds after a 429 without a usable Retry-After header
    pub rate_limit_backoff_ms: u64,

    /// Maximum response body size in bytes
    pub max_response_bytes: usize,

    /// Content types accepted as pages
    pub allowed_content_types: Vec<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("ReviewerCalls/{}", env!("CARGO_PKG_VERSION")),
            concurrency: 10,
            connect_timeout_secs: 5,
            total_timeout_secs: 15,
            max_attempts: 3,
            backoff_base_ms: 1_000,
            rate_limit_backoff_ms: 5_000,
            max_response_bytes: 2 * 1024 * 1024,
            allowed_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
            ],
        }
    }
}

/// Builder for FetcherConfig
#[derive(Debug, Default)]
pub struct FetcherConfigBuilder {
    config: FetcherConfig,
}

impl FetcherConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: FetcherConfig::default(),
        }
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the maximum number of concurrent requests
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    /// Set the connect timeout in seconds
    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.config.connect_timeout_secs = secs;
        self
    }

    /// Set the total request timeout in seconds
    pub fn total_timeout_secs(mut self, secs: u64) -> Self {
        self.config.total_timeout_secs = secs;
        self
    }

    /// Set the maximum number of attempts per URL
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.config.max_attempts = max_attempts.max(1);
        self
    }

    /// Set the exponential backoff base in milliseconds
    pub fn backoff_base_ms(mut self, ms: u64) -> Self {
        self.config.backoff_base_ms = ms;
        self
    }

    /// Set the fixed 429 backoff in milliseconds
    pub fn rate_limit_backoff_ms(mut self, ms: u64) -> Self {
        self.config.rate_limit_backoff_ms = ms;
        self
    }

    /// Set the maximum accepted body size in bytes
    pub fn max_response_bytes(mut self, bytes: usize) -> Self {
        self.config.max_response_bytes = bytes;
        self
    }

    /// Set the accepted content types
    pub fn allowed_content_types(mut self, types: Vec<String>) -> Self {
        self.config.allowed_content_types = types;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FetcherConfig {
        self.config
    }
}

impl FetcherConfig {
    /// Create a new builder
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::new()
    }

    /// Get the connect timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Get the total timeout as a Duration
    pub fn total_timeout(&self) -> Duration {
        Duration::from_secs(self.total_timeout_secs)
    }

    /// Get the backoff base as a Duration
    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    /// Get the 429 backoff as a Duration
    pub fn rate_limit_backoff(&self) -> Duration {
        Duration::from_millis(self.rate_limit_backoff_ms)
    }

    /// Check a `Content-Type` header value against the allow-list
    pub fn accepts_content_type(&self, header: &str) -> bool {
        let mime = header
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&mime))
    }
}
