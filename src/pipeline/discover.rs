//! Discovery for a single conference

use tracing::{debug, info, instrument, warn};

use super::{Candidate, DiscoveryConfig};
use crate::conference::Conference;
use crate::explorer::explore_graph;
use crate::fetcher::PageSource;
use crate::filters::has_promising_keywords;
use crate::known_urls::KnownUrls;
use crate::scoring::{
    Decision, QueryCategory, ScoredUrl, ScoringConfig, SourceType, page_match_score,
    score_search_result,
};
use crate::search::{SearchHit, SearchProvider};
use crate::urls::{host_of, normalize_url, path_depth, path_of};
use crate::validator::check_pages;

fn homepage_query(conference: &Conference, year: i32) -> String {
    format!("\"{}\" \"{}\" conference", conference.short_name, year)
}

fn reviewer_query(conference: &Conference, year: i32) -> String {
    format!("\"{}\" \"{}\" reviewer", conference.short_name, year)
}

async fn search_or_empty<S: SearchProvider>(search: &S, query: &str, max: usize) -> Vec<SearchHit> {
    match search.search(query, max).await {
        Ok(hits) => hits,
        Err(e) => {
            warn!(provider = search.name(), error = %e, query, "Search failed");
            Vec::new()
        }
    }
}

/// Hit that best matches the conference, preferring shallow paths on ties.
///
/// Hits with no page match at all are never a homepage.
fn best_homepage<'a>(
    hits: &'a [SearchHit],
    conference: &Conference,
    year: i32,
    scoring: &ScoringConfig,
) -> Option<&'a SearchHit> {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| (page_match_score(hit, conference, year, scoring), i, hit))
        .filter(|(score, _, _)| *score > 0.0)
        .max_by(|(a, ia, ha), (b, ib, hb)| {
            a.total_cmp(b)
                .then_with(|| path_depth(&hb.url).cmp(&path_depth(&ha.url)))
                .then_with(|| ib.cmp(ia))
        })
        .map(|(_, _, hit)| hit)
}

/// Exploration seeds for one conference: the best homepage first, then any
/// reviewer-search hits hosted elsewhere.
///
/// Empty when no homepage was found.
#[instrument(skip_all, fields(conference = %conference.short_name, year = year))]
pub async fn find_seeds<S: SearchProvider>(
    search: &S,
    conference: &Conference,
    year: i32,
    config: &DiscoveryConfig,
) -> Vec<ScoredUrl> {
    let max = config.results_per_query;
    let hits = search_or_empty(search, &homepage_query(conference, year), max).await;
    let Some(homepage) = best_homepage(&hits, conference, year, &config.scoring) else {
        info!(hits = hits.len(), "No homepage candidate");
        return Vec::new();
    };
    debug!(
        url = %homepage.url,
        score = score_search_result(homepage, conference, year, QueryCategory::Homepage, &config.scoring),
        "Homepage selected"
    );

    let homepage_host = host_of(&homepage.url);
    let mut seeds = vec![ScoredUrl::seed(
        normalize_url(&homepage.url),
        config.explorer.homepage_seed_score,
        SourceType::Homepage,
        homepage.title.clone(),
    )];

    for hit in search_or_empty(search, &reviewer_query(conference, year), max).await {
        let Some(host) = host_of(&hit.url) else {
            continue;
        };
        if Some(&host) == homepage_host.as_ref() {
            continue;
        }
        debug!(
            url = %hit.url,
            score = score_search_result(&hit, conference, year, QueryCategory::Reviewer, &config.scoring),
            "Auxiliary seed"
        );
        seeds.push(ScoredUrl::seed(
            normalize_url(&hit.url),
            config.explorer.reviewer_seed_score,
            SourceType::ReviewerSearch,
            hit.title,
        ));
    }

    seeds
}

/// Worth a content check: unknown, and either from the reviewer search or
/// mentioning recruitment in its anchor text or path
fn is_promising(node: &ScoredUrl, known: &KnownUrls) -> bool {
    if known.contains(&node.url) {
        debug!(url = %node.url, "Already known");
        return false;
    }
    node.from_reviewer_search
        || has_promising_keywords(&node.text)
        || has_promising_keywords(&path_of(&node.url))
}

/// The conference with its domain filled in from the homepage when the
/// registry has none
fn scoped(conference: &Conference, homepage_url: &str) -> Conference {
    let mut scoped = conference.clone();
    if scoped.domain.trim().is_empty() {
        if let Some(host) = host_of(homepage_url) {
            scoped.domain = host.trim_start_matches("www.").to_string();
        }
    }
    scoped
}

/// Search, explore and validate one conference.
///
/// Returns the candidates in exploration order. A conference without a
/// homepage yields none.
#[instrument(skip_all, fields(conference = %conference.short_name, year = year))]
pub async fn discover_conference<P: PageSource, S: SearchProvider>(
    source: &P,
    search: &S,
    conference: &Conference,
    known: &KnownUrls,
    year: i32,
    config: &DiscoveryConfig,
) -> Vec<Candidate> {
    let seeds = find_seeds(search, conference, year, config).await;
    let Some(homepage) = seeds.first() else {
        return Vec::new();
    };
    let conference = scoped(conference, &homepage.url);

    let explored = explore_graph(source, seeds, &conference, &config.explorer, &config.scoring).await;
    let explored_count = explored.len();
    let promising: Vec<ScoredUrl> = explored
        .into_iter()
        .filter(|node| is_promising(node, known))
        .collect();

    let urls: Vec<String> = promising.iter().map(|node| node.url.clone()).collect();
    let matches = check_pages(source, &urls, year, &config.scoring).await;

    let candidates: Vec<Candidate> = promising
        .iter()
        .zip(matches)
        .filter_map(|(node, found)| {
            let found = found?;
            if known.contains(&found.final_url) {
                debug!(url = %found.final_url, "Redirects to a known URL");
                return None;
            }
            let candidate = Candidate::new(&conference.short_name, year, node, found, &config.scoring);
            if candidate.decision == Decision::Reject && !config.include_rejected {
                debug!(url = %candidate.url(), score = candidate.final_score, "Rejected");
                return None;
            }
            Some(candidate)
        })
        .collect();

    info!(
        explored = explored_count,
        checked = urls.len(),
        candidates = candidates.len(),
        "Conference discovery finished"
    );
    candidates
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::fetcher::FetchedPage;
    use crate::search::SearchError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    /// Search results keyed by a substring of the query
    #[derive(Default)]
    pub(crate) struct StaticSearch {
        pub results: Vec<(String, Vec<SearchHit>)>,
    }

    impl StaticSearch {
        pub fn with(mut self, needle: &str, hits: Vec<SearchHit>) -> Self {
            self.results.push((needle.to_string(), hits));
            self
        }
    }

    impl SearchProvider for StaticSearch {
        fn name(&self) -> &str {
            "static"
        }

        async fn search(&self, query: &str, max: usize) -> Result<Vec<SearchHit>, SearchError> {
            if query.contains("BOOM") {
                panic!("search backend exploded");
            }
            Ok(self
                .results
                .iter()
                .filter(|(needle, _)| query.contains(needle.as_str()))
                .flat_map(|(_, hits)| hits.iter().take(max).cloned())
                .collect())
        }
    }

    /// In-memory web that records every fetch
    #[derive(Default)]
    pub(crate) struct StaticWeb {
        pub pages: HashMap<String, String>,
        pub requests: Mutex<Vec<String>>,
    }

    impl StaticWeb {
        pub fn with(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    impl PageSource for StaticWeb {
        fn fetch(&self, url: &str) -> impl Future<Output = (String, Option<FetchedPage>)> + Send {
            self.requests.lock().unwrap().push(url.to_string());
            let page = self.pages.get(url).map(|b| FetchedPage::new(url, b.clone()));
            let url = url.to_string();
            async move { (url, page) }
        }
    }

    pub(crate) fn hit(url: &str, title: &str) -> SearchHit {
        SearchHit {
            url: url.to_string(),
            title: title.to_string(),
            snippet: String::new(),
        }
    }

    pub(crate) fn conference(short: &str) -> Conference {
        Conference {
            short_name: short.to_string(),
            display_name: format!("{short} Conference"),
            domain: "conf.org".to_string(),
            ..Conference::default()
        }
    }

    pub(crate) const CFR_PAGE: &str = "<html><body><h1>Call for Reviewers</h1>\
        <p>We invite self-nominations for the ICSE 2026 program committee.</p></body></html>";

    /// ICSE homepage linking to its call for reviewers
    pub(crate) fn icse_web() -> (StaticSearch, StaticWeb) {
        let search = StaticSearch::default()
            .with("\"ICSE\" \"2026\" conference", vec![hit("https://icse2026.conf.org/", "ICSE 2026")])
            .with(
                "\"ICSE\" \"2026\" reviewer",
                vec![
                    hit("https://icse2026.conf.org/reviewers", "ICSE reviewers"),
                    hit("https://other.org/icse-reviewers", "ICSE reviewers wanted"),
                ],
            );
        let web = StaticWeb::default()
            .with(
                "https://icse2026.conf.org",
                r#"<a href="/call-for-reviewers">Call for Reviewers</a><a href="/venue">Venue</a>"#,
            )
            .with("https://icse2026.conf.org/call-for-reviewers", CFR_PAGE);
        (search, web)
    }

    #[test]
    fn test_best_homepage_prefers_score_then_shallow_path() {
        let conf = conference("ICSE");
        let scoring = ScoringConfig::default();
        let hits = vec![
            hit("https://unrelated.com/", "Something else"),
            hit("https://icse2026.conf.org/program/day1", "ICSE 2026"),
            hit("https://icse2026.conf.org/", "ICSE 2026"),
            hit("https://icse2026.conf.org/about", "ICSE 2026"),
        ];
        let best = best_homepage(&hits, &conf, 2026, &scoring).unwrap();
        assert_eq!(best.url, "https://icse2026.conf.org/");
    }

    #[test]
    fn test_best_homepage_requires_match() {
        let hits = vec![hit("https://unrelated.com/", "Something else")];
        assert!(best_homepage(&hits, &conference("ICSE"), 2026, &ScoringConfig::default()).is_none());
    }

    #[tokio::test]
    async fn test_find_seeds() {
        let (search, _) = icse_web();
        let seeds = find_seeds(&search, &conference("ICSE"), 2026, &DiscoveryConfig::default()).await;

        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].url, "https://icse2026.conf.org");
        assert_eq!(seeds[0].source_type, SourceType::Homepage);
        assert_eq!(seeds[0].search_score, 6.0);
        assert_eq!(seeds[1].url, "https://other.org/icse-reviewers");
        assert!(seeds[1].from_reviewer_search);
        assert_eq!(seeds[1].search_score, 5.0);
    }

    #[tokio::test]
    async fn test_no_homepage_no_candidates() {
        let search = StaticSearch::default();
        let web = StaticWeb::default();
        let found = discover_conference(
            &web,
            &search,
            &conference("ICSE"),
            &KnownUrls::new(),
            2026,
            &DiscoveryConfig::default(),
        )
        .await;
        assert!(found.is_empty());
        assert!(web.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discovers_call_for_reviewers() {
        let (search, web) = icse_web();
        let found = discover_conference(
            &web,
            &search,
            &conference("ICSE"),
            &KnownUrls::new(),
            2026,
            &DiscoveryConfig::default(),
        )
        .await;

        assert_eq!(found.len(), 1);
        let candidate = &found[0];
        assert_eq!(candidate.url(), "https://icse2026.conf.org/call-for-reviewers");
        assert_eq!(candidate.conference, "ICSE");
        assert_eq!(candidate.scored.depth, 1);
        assert!(candidate.matched_keywords.contains(&"self-nomination".to_string()));
        assert_eq!(candidate.decision, Decision::Accept);
    }

    #[tokio::test]
    async fn test_known_urls_skipped() {
        let (search, web) = icse_web();
        let known: KnownUrls = ["https://icse2026.conf.org/call-for-reviewers/"]
            .into_iter()
            .collect();
        let found = discover_conference(
            &web,
            &search,
            &conference("ICSE"),
            &known,
            2026,
            &DiscoveryConfig::default(),
        )
        .await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_candidates_kept_on_request() {
        let scoring = ScoringConfig::builder().thresholds(100.0, 50.0).build().unwrap();
        let (search, web) = icse_web();
        let conf = conference("ICSE");
        let known = KnownUrls::new();

        let dropped = DiscoveryConfig::builder().scoring(scoring.clone()).build();
        assert!(discover_conference(&web, &search, &conf, &known, 2026, &dropped).await.is_empty());

        let kept = DiscoveryConfig::builder()
            .scoring(scoring)
            .include_rejected(true)
            .build();
        let found = discover_conference(&web, &search, &conf, &known, 2026, &kept).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].decision, Decision::Reject);
    }

    #[test]
    fn test_scoped_fills_missing_domain() {
        let conf = Conference {
            domain: String::new(),
            ..conference("ICSE")
        };
        assert_eq!(scoped(&conf, "https://www.icse.org/2026").domain, "icse.org");
        assert_eq!(scoped(&conference("ICSE"), "https://x.org").domain, "conf.org");
    }
}
