//! # Web Search Module
//!
//! Pluggable search providers used to find a conference's homepage and any
//! standalone reviewer-call pages before graph exploration starts.
//!
//! ## Key Components
//!
//! - `SearchProvider`: Trait implemented by every backend
//! - `DuckDuckGo`: Scrapes the DuckDuckGo HTML endpoint, no key needed
//! - `Serper`: Google results through the Serper JSON API
//! - `FallbackSearch`: Primary provider with an optional secondary
//!
//! ## Features
//!
//! - Per-provider rate limiting with `governor`
//! - Date-range filtering for DuckDuckGo
//! - Provider failures degrade to an empty hit list instead of aborting a run

mod duckduckgo;
mod error;
mod serper;

pub use duckduckgo::DuckDuckGo;
pub use error::SearchError;
pub use serper::Serper;

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A single search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

/// A text search backend
pub trait SearchProvider: Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Run `query` and return at most `max_results` hits
    fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;
}

/// Recency filter for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    Day,
    Week,
    #[default]
    Month,
    Year,
    /// No recency filter
    Any,
}

impl DateRange {
    /// DuckDuckGo `df` parameter value, `None` for no filter
    pub fn code(self) -> Option<&'static str> {
        match self {
            DateRange::Day => Some("d"),
            DateRange::Week => Some("w"),
            DateRange::Month => Some("m"),
            DateRange::Year => Some("y"),
            DateRange::Any => None,
        }
    }
}

impl FromStr for DateRange {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "d" => Ok(DateRange::Day),
            "w" => Ok(DateRange::Week),
            "m" => Ok(DateRange::Month),
            "y" => Ok(DateRange::Year),
            "none" => Ok(DateRange::Any),
            other => Err(SearchError::InvalidOption(format!(
                "unknown date range '{other}', expected d, w, m, y or none"
            ))),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("none"))
    }
}

/// Which backend to use as the primary provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    DuckDuckGo,
    Serper,
}

impl FromStr for ProviderKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "duckduckgo" | "ddg" => Ok(ProviderKind::DuckDuckGo),
            "serper" => Ok(ProviderKind::Serper),
            other => Err(SearchError::InvalidOption(format!(
                "unknown search provider '{other}'"
            ))),
        }
    }
}

/// Any concrete provider, so a fallback chain can mix backends
pub enum Provider {
    DuckDuckGo(DuckDuckGo),
    Serper(Serper),
}

impl SearchProvider for Provider {
    fn name(&self) -> &str {
        match self {
            Provider::DuckDuckGo(p) => p.name(),
            Provider::Serper(p) => p.name(),
        }
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        match self {
            Provider::DuckDuckGo(p) => p.search(query, max_results).await,
            Provider::Serper(p) => p.search(query, max_results).await,
        }
    }
}

/// Tries `primary`, then `secondary`; never fails.
///
/// When every provider errors the search yields no hits and a warning is
/// logged, so a run proceeds with zero search results rather than aborting.
pub struct FallbackSearch<P, S = P> {
    primary: P,
    secondary: Option<S>,
}

impl<P: SearchProvider, S: SearchProvider> FallbackSearch<P, S> {
    pub fn new(primary: P, secondary: Option<S>) -> Self {
        Self { primary, secondary }
    }
}

impl FallbackSearch<Provider, Provider> {
    /// Build the provider chain for `kind`.
    ///
    /// Serper is only usable with an API key; without one DuckDuckGo is the
    /// sole provider. With a key, the other backend becomes the fallback.
    pub fn from_kind(
        kind: ProviderKind,
        serper_key: Option<String>,
        date_range: DateRange,
    ) -> Result<Self, SearchError> {
        let ddg = DuckDuckGo::new(date_range)?;
        let serper = serper_key
            .filter(|key| !key.trim().is_empty())
            .map(Serper::new)
            .transpose()?;

        Ok(match (kind, serper) {
            (ProviderKind::Serper, Some(serper)) => Self::new(
                Provider::Serper(serper),
                Some(Provider::DuckDuckGo(ddg)),
            ),
            (ProviderKind::Serper, None) => {
                warn!("Serper selected without an API key, using DuckDuckGo");
                Self::new(Provider::DuckDuckGo(ddg), None)
            }
            (ProviderKind::DuckDuckGo, serper) => {
                Self::new(Provider::DuckDuckGo(ddg), serper.map(Provider::Serper))
            }
        })
    }
}

impl<P: SearchProvider, S: SearchProvider> SearchProvider for FallbackSearch<P, S> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        match self.primary.search(query, max_results).await {
            Ok(hits) => return Ok(hits),
            Err(e) => warn!(provider = self.primary.name(), error = %e, query, "Search failed"),
        }

        if let Some(secondary) = &self.secondary {
            debug!(provider = secondary.name(), "Trying fallback search provider");
            match secondary.search(query, max_results).await {
                Ok(hits) => return Ok(hits),
                Err(e) => warn!(provider = secondary.name(), error = %e, query, "Search failed"),
            }
        }

        warn!(query, "All search providers failed, continuing without results");
        Ok(Vec::new())
    }
}
