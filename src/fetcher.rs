//! # Page Fetcher Module
//!
//! This module retrieves HTML pages over HTTP for the rest of the discovery
//! pipeline. A fetch never fails loudly: every terminal error is logged and
//! reported as an absent page, so callers only branch on `Option`.
//!
//! ## Key Components
//!
//! - `Fetcher`: Shared HTTP client with a concurrency gate and retry policy
//! - `FetcherConfig`: Timeouts, retry and response-guard settings
//! - `RetryPolicy` / `RetryState`: Pure retry state machine
//! - `PageSource`: The seam the explorer and validator fetch through
//!
//! ## Features
//!
//! - Bounded number of concurrent in-flight requests
//! - Exponential backoff on 5xx and timeouts, Retry-After aware on 429
//! - Content-type allow-list and body size cap
//! - Redirects followed, final URL reported back

mod client;
mod config;
mod error;
mod retry;

pub use client::Fetcher;
pub use config::{FetcherConfig, FetcherConfigBuilder};
pub use error::FetchError;
pub use retry::{RetryPolicy, RetryState};

use std::future::Future;

use serde::{Deserialize, Serialize};

/// A successfully fetched HTML page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL after following redirects
    pub final_url: String,

    /// Decoded response body
    pub body: String,

    /// Raw `Last-Modified` header, if the server sent one
    pub last_modified: Option<String>,
}

impl FetchedPage {
    /// Build a page with no headers, mostly for tests and in-memory sources
    pub fn new(final_url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            final_url: final_url.into(),
            body: body.into(),
            last_modified: None,
        }
    }
}

/// Anything that can turn a URL into a page.
///
/// Returns the requested URL together with the page, or `None` when the page
/// could not be retrieved for any reason.
pub trait PageSource: Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = (String, Option<FetchedPage>)> + Send;
}

impl PageSource for Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = (String, Option<FetchedPage>)> + Send {
        Fetcher::fetch(self, url)
    }
}
