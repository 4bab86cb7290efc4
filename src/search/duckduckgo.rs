//! DuckDuckGo HTML endpoint provider

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, debug_span, instrument, Instrument};
use url::Url;

use super::{DateRange, SearchError, SearchHit, SearchProvider};

const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com/html/";
const REQUEST_TIMEOUT_SECS: u64 = 20;
const REQUESTS_PER_MINUTE: u32 = 20;
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Scrapes result pages of the JavaScript-free DuckDuckGo frontend
pub struct DuckDuckGo {
    client: Client,
    base_url: String,
    date_range: DateRange,
    limiter: Arc<DefaultDirectRateLimiter>,
}

#[cfg(test)]
impl DuckDuckGo {
    /// Set the base URL (for testing only)
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }
}

impl DuckDuckGo {
    pub fn new(date_range: DateRange) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        let quota = Quota::per_minute(NonZeroU32::new(REQUESTS_PER_MINUTE).unwrap_or(NonZeroU32::MIN));

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            date_range,
            limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }
}

impl SearchProvider for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    #[instrument(skip(self), fields(provider = "duckduckgo"))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        self.limiter.until_ready().instrument(debug_span!("limiter")).await;

        let mut params = vec![("q", query)];
        if let Some(df) = self.date_range.code() {
            params.push(("df", df));
        }

        let response = self.client.get(&self.base_url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let hits = parse_results(&body, max_results)?;
        debug!(count = hits.len(), "DuckDuckGo results");
        Ok(hits)
    }
}

/// Parse a DuckDuckGo HTML result page, skipping ads
fn parse_results(html: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
    let selector = |css: &str| {
        Selector::parse(css).map_err(|e| SearchError::Provider(format!("bad selector {css}: {e}")))
    };
    let result = selector("div.result")?;
    let link = selector("a.result__a")?;
    let snippet = selector(".result__snippet")?;

    let document = Html::parse_document(html);
    let hits = document
        .select(&result)
        .filter(|r| !r.value().classes().any(|c| c == "result--ad"))
        .filter_map(|r| {
            let anchor = r.select(&link).next()?;
            let url = unwrap_redirect(anchor.value().attr("href")?)?;
            let title = collapse(anchor.text().collect::<String>());
            let snippet = r
                .select(&snippet)
                .next()
                .map(|s| collapse(s.text().collect::<String>()))
                .unwrap_or_default();
            Some(SearchHit { url, title, snippet })
        })
        .take(max_results)
        .collect();
    Ok(hits)
}

/// Resolve a DuckDuckGo `/l/?uddg=` redirect to its target.
///
/// Direct links pass through; anything that is not http(s) is dropped.
fn unwrap_redirect(href: &str) -> Option<String> {
    let base = Url::parse("https://duckduckgo.com").ok()?;
    let url = base.join(href).ok()?;

    let target = if url.path().starts_with("/l/") {
        let (_, value) = url.query_pairs().find(|(key, _)| key == "uddg")?;
        Url::parse(&value).ok()?
    } else {
        url
    };

    matches!(target.scheme(), "http" | "https").then(|| target.to_string())
}

fn collapse(text: String) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
