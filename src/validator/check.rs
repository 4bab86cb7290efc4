//! Page content check

use std::fmt;

use chrono::NaiveDate;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::false_positive::is_false_positive_url;
use super::patterns::{has_root_term, match_keywords};
use super::snippet::{SNIPPET_RADIUS, evidence_snippet};
use crate::fetcher::PageSource;
use crate::parser::{extract_publication_date, extract_visible_text};
use crate::scoring::{ScoringConfig, has_positive_signals, score_content_signals};

/// Content score at or above which a match is strong
const STRONG_MATCH_SCORE: f64 = 8.0;

/// Content score at or above which a match is moderate
const MODERATE_MATCH_SCORE: f64 = 4.0;

/// Confidence bucket of a content match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Weak,
    Moderate,
    Strong,
}

impl MatchStrength {
    pub fn from_score(content_score: f64) -> Self {
        if content_score >= STRONG_MATCH_SCORE {
            MatchStrength::Strong
        } else if content_score >= MODERATE_MATCH_SCORE {
            MatchStrength::Moderate
        } else {
            MatchStrength::Weak
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchStrength::Weak => "weak",
            MatchStrength::Moderate => "moderate",
            MatchStrength::Strong => "strong",
        })
    }
}

/// A page whose content plausibly carries a recruitment call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMatch {
    /// URL that was checked
    pub url: String,

    /// URL the page was served from after redirects
    pub final_url: String,

    /// Content keywords found, in keyword order
    pub matched_keywords: Vec<String>,

    /// Signal score plus keyword and year bonuses
    pub content_score: f64,

    pub strength: MatchStrength,

    /// Signal contributions behind the score
    pub signals: Vec<String>,

    /// Page text around the first matched keyword
    pub evidence_snippet: String,

    pub publication_date: NaiveDate,
}

/// Fetch `url` and decide whether it is a recruitment call for `year`.
///
/// Returns `None` for false-positive URLs, failed fetches, pages without a
/// positive signal, and pages matching no content keyword.
#[instrument(skip(source, scoring))]
pub async fn check_page_content<S: PageSource>(
    source: &S,
    url: &str,
    year: i32,
    scoring: &ScoringConfig,
) -> Option<ContentMatch> {
    if is_false_positive_url(url) {
        debug!("False-positive URL pattern");
        return None;
    }

    let (_, page) = source.fetch(url).await;
    let Some(page) = page else {
        debug!("Fetch failed");
        return None;
    };

    let text = extract_visible_text(&page.body);
    if !has_root_term(&text) {
        debug!("No root term");
        return None;
    }
    if !has_positive_signals(&text, scoring.context_window) {
        debug!("No positive signal");
        return None;
    }

    let matches = match_keywords(&text);
    let Some(&(_, first_pos)) = matches.first() else {
        debug!("No content keyword");
        return None;
    };

    let signals = score_content_signals(&text, scoring);
    let mut content_score = signals.score + scoring.content_weak * matches.len() as f64;
    if text.contains(&year.to_string()) {
        content_score += scoring.content_year;
    }

    Some(ContentMatch {
        url: url.to_string(),
        final_url: page.final_url.clone(),
        matched_keywords: matches.iter().map(|(kw, _)| kw.to_string()).collect(),
        content_score,
        strength: MatchStrength::from_score(content_score),
        signals: signals.evidence,
        evidence_snippet: evidence_snippet(&text, first_pos, SNIPPET_RADIUS),
        publication_date: extract_publication_date(&page),
    })
}

/// Check several pages concurrently; results keep the input order.
///
/// Concurrency is bounded by the page source.
pub async fn check_pages<S: PageSource>(
    source: &S,
    urls: &[String],
    year: i32,
    scoring: &ScoringConfig,
) -> Vec<Option<ContentMatch>> {
    join_all(
        urls.iter()
            .map(|url| check_page_content(source, url, year, scoring)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchedPage;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Pages {
        bodies: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl Pages {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.bodies.insert(url.to_string(), body.to_string());
            self
        }
    }

    impl PageSource for Pages {
        fn fetch(&self, url: &str) -> impl Future<Output = (String, Option<FetchedPage>)> + Send {
            self.requests.lock().unwrap().push(url.to_string());
            let page = self.bodies.get(url).map(|b| FetchedPage::new(url, b.clone()));
            let url = url.to_string();
            async move { (url, page) }
        }
    }

    async fn check(pages: &Pages, url: &str) -> Option<ContentMatch> {
        check_page_content(pages, url, 2026, &ScoringConfig::default()).await
    }

    #[tokio::test]
    async fn test_valid_call() {
        let pages = Pages::default().with(
            "https://example.com/reviewer-call",
            "<html><body><h1>Call for reviewers now open!</h1>\
             <p>Please nominate yourself for the 2026 edition.</p></body></html>",
        );
        let found = check(&pages, "https://example.com/reviewer-call").await.unwrap();

        assert!(found.matched_keywords.contains(&"call for reviewers".to_string()));
        assert!(found.matched_keywords.contains(&"nominate yourself".to_string()));
        assert!(found.content_score > 0.0);
        assert!(found.evidence_snippet.contains("call for reviewers"));
        assert_eq!(found.strength, MatchStrength::from_score(found.content_score));
    }

    #[tokio::test]
    async fn test_false_positive_url_not_fetched() {
        let pages = Pages::default().with("https://example.com/committee", "call for reviewers");
        assert!(check(&pages, "https://example.com/committee").await.is_none());
        assert!(pages.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        assert!(check(&Pages::default(), "https://example.com/page").await.is_none());
    }

    #[tokio::test]
    async fn test_no_positive_signals() {
        let pages = Pages::default()
            .with("https://example.com/a", "<p>General conference information</p>")
            .with("https://example.com/b", "<p>Call for workshop proposals. PC members welcome.</p>");
        assert!(check(&pages, "https://example.com/a").await.is_none());
        assert!(check(&pages, "https://example.com/b").await.is_none());
    }

    #[tokio::test]
    async fn test_signal_without_keyword() {
        let pages = Pages::default().with(
            "https://example.com/form",
            "<p>Fill in the nomination form to review for us</p>",
        );
        assert!(check(&pages, "https://example.com/form").await.is_none());
    }

    #[tokio::test]
    async fn test_script_text_ignored() {
        let pages = Pages::default().with(
            "https://example.com/page",
            "<script>var s = 'call for reviewers, nominate yourself';</script><p>Welcome</p>",
        );
        assert!(check(&pages, "https://example.com/page").await.is_none());
    }

    #[tokio::test]
    async fn test_year_bonus() {
        let body = |year: &str| {
            format!("<p>Call for reviewers for {year}: self-nomination is open.</p>")
        };
        let pages = Pages::default()
            .with("https://example.com/with", &body("2026"))
            .with("https://example.com/without", &body("next year"));

        let with = check(&pages, "https://example.com/with").await.unwrap();
        let without = check(&pages, "https://example.com/without").await.unwrap();
        assert_eq!(
            with.content_score - without.content_score,
            ScoringConfig::default().content_year
        );
    }

    #[tokio::test]
    async fn test_check_pages_keeps_order() {
        let pages = Pages::default().with(
            "https://example.com/reviewer-call",
            "<p>Call for reviewers: nominate yourself</p>",
        );
        let urls = vec![
            "https://example.com/missing".to_string(),
            "https://example.com/reviewer-call".to_string(),
        ];
        let results = check_pages(&pages, &urls, 2026, &ScoringConfig::default()).await;
        assert!(results[0].is_none());
        assert!(results[1].is_some());
    }

    #[test]
    fn test_match_strength_buckets() {
        assert_eq!(MatchStrength::from_score(8.0), MatchStrength::Strong);
        assert_eq!(MatchStrength::from_score(7.9), MatchStrength::Moderate);
        assert_eq!(MatchStrength::from_score(4.0), MatchStrength::Moderate);
        assert_eq!(MatchStrength::from_score(3.9), MatchStrength::Weak);
        assert_eq!(MatchStrength::Strong.to_string(), "strong");
    }
}
