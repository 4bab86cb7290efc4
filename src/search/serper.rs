//! Serper (Google Search API) provider

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, instrument, Instrument};

use super::{SearchError, SearchHit, SearchProvider};

const DEFAULT_BASE_URL: &str = "https://google.serper.dev";
const REQUEST_TIMEOUT_SECS: u64 = 20;
const REQUESTS_PER_MINUTE: u32 = 60;

/// Serper never returns more than this many organic results per call
const MAX_RESULTS_PER_CALL: usize = 100;

#[derive(Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

/// Google results through the Serper JSON API
pub struct Serper {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Arc<DefaultDirectRateLimiter>,
}

#[cfg(test)]
impl Serper {
    /// Set the base URL (for testing only)
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }
}

impl Serper {
    pub fn new(api_key: String) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let quota = Quota::per_minute(NonZeroU32::new(REQUESTS_PER_MINUTE).unwrap_or(NonZeroU32::MIN));

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }
}

impl SearchProvider for Serper {
    fn name(&self) -> &str {
        "serper"
    }

    #[instrument(skip(self), fields(provider = "serper"))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        self.limiter.until_ready().instrument(debug_span!("limiter")).await;

        let request = SearchRequest {
            q: query,
            num: max_results.clamp(1, MAX_RESULTS_PER_CALL),
        };
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("X-API-KEY", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Provider(format!("invalid Serper response: {e}")))?;

        let hits: Vec<SearchHit> = body
            .organic
            .into_iter()
            .take(max_results)
            .map(|r| SearchHit {
                url: r.link,
                title: r.title,
                snippet: r.snippet,
            })
            .collect();
        debug!(count = hits.len(), "Serper results");
        Ok(hits)
    }
}
