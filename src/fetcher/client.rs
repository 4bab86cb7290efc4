//! HTTP fetcher implementation

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;
use reqwest::header::{CONTENT_TYPE, LAST_MODIFIED, RETRY_AFTER};
use reqwest::{Client as ReqwestClient, StatusCode};
use tokio::sync::Semaphore;
use tracing::{debug, instrument, warn};

use crate::fetcher::FetchedPage;
use crate::fetcher::config::FetcherConfig;
use crate::fetcher::error::FetchError;
use crate::fetcher::retry::{RetryPolicy, RetryState};

/// Shared page fetcher
///
/// One fetcher is created per run and shared by every conference. Requests
/// beyond the configured concurrency wait for a permit; each retry attempt
/// takes its own permit, so a backing-off URL does not block others.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: ReqwestClient,
    gate: Arc<Semaphore>,
    policy: RetryPolicy,
    config: Arc<FetcherConfig>,
}

impl Fetcher {
    /// Create a new fetcher with the given configuration
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout())
            .timeout(config.total_timeout())
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            gate: Arc::new(Semaphore::new(config.concurrency.max(1))),
            policy: RetryPolicy::from_config(&config),
            config: Arc::new(config),
        })
    }

    /// The configuration this fetcher was built with
    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch a single page.
    ///
    /// Returns the requested URL and the page, or `None` after a terminal
    /// failure. Errors are logged, never returned.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> (String, Option<FetchedPage>) {
        let mut state = RetryState::Attempting { attempt: 0 };
        let mut page = None;

        loop {
            state = match state {
                RetryState::Attempting { attempt } => match self.attempt(url).await {
                    Ok(fetched) => {
                        page = Some(fetched);
                        RetryState::Succeeded
                    }
                    Err(err) => {
                        let next = self.policy.after_failure(attempt, &err);
                        match &next {
                            RetryState::Backoff { delay, .. } => debug!(
                                "Attempt {} for {} failed: {}; retrying in {:?}",
                                attempt + 1,
                                url,
                                err,
                                delay
                            ),
                            _ => warn!("Giving up on {} after {} attempt(s): {}", url, attempt + 1, err),
                        }
                        next
                    }
                },
                RetryState::Backoff {
                    next_attempt,
                    delay,
                } => {
                    tokio::time::sleep(delay).await;
                    RetryState::Attempting {
                        attempt: next_attempt,
                    }
                }
                RetryState::Succeeded | RetryState::FailedTerminal => break,
            };
        }

        (url.to_string(), page)
    }

    /// Fetch many pages concurrently, bounded by the fetcher's gate.
    ///
    /// Results come back in input order.
    pub async fn fetch_many(&self, urls: &[String]) -> Vec<(String, Option<FetchedPage>)> {
        join_all(urls.iter().map(|url| self.fetch(url))).await
    }

    /// One HTTP round trip, holding a concurrency permit for its duration
    async fn attempt(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let _permit = self.gate.acquire().await.map_err(|_| FetchError::Closed)?;

        let mut response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|h| h.to_str().ok())
                .and_then(parse_retry_after);
            return Err(FetchError::RateLimited { retry_after });
        }
        if status.is_server_error() {
            return Err(FetchError::Server(status.as_u16()));
        }
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !self.config.accepts_content_type(&content_type) {
            return Err(FetchError::ContentType(content_type));
        }

        let max = self.config.max_response_bytes;
        if let Some(declared) = response.content_length() {
            if declared > max as u64 {
                return Err(FetchError::TooLarge {
                    size: declared,
                    max,
                });
            }
        }

        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        let final_url = response.url().to_string();

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > max {
                return Err(FetchError::TooLarge {
                    size: (body.len() + chunk.len()) as u64,
                    max,
                });
            }
            body.extend_from_slice(&chunk);
        }

        debug!("Fetched {} ({} bytes)", final_url, body.len());
        Ok(FetchedPage {
            final_url,
            body: String::from_utf8_lossy(&body).into_owned(),
            last_modified,
        })
    }
}

/// Parse a Retry-After header given either as seconds or as an HTTP date
fn parse_retry_after(value: &str) -> Option<Duration> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    let when = chrono::DateTime::parse_from_rfc2822(value).ok()?;
    (when.with_timezone(&Utc) - Utc::now()).to_std().ok()
}
