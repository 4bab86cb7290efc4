//! Priority-driven exploration of a conference's link graph

use tracing::{debug, info, instrument};

use super::{ExplorerConfig, Frontier};
use crate::conference::Conference;
use crate::fetcher::{FetchedPage, PageSource};
use crate::filters::{LinkFilterOptions, filter_links, should_explore_link};
use crate::parser::extract_links;
use crate::scoring::{ScoredUrl, ScoringConfig, score_link};
use crate::urls::{is_same_domain, normalize_url};

/// Explore the web around `seeds`, highest graph score first.
///
/// Every popped node is recorded. Nodes below `max_depth` are fetched and
/// their in-scope links queued as children. Exploration stops when the queue
/// is empty or `max_pages` pages have been fetched; whatever is still queued
/// is appended unexpanded.
///
/// The result contains each normalized URL at most once.
#[instrument(skip_all, fields(conference = %conference.short_name, seeds = seeds.len()))]
pub async fn explore_graph<S: PageSource>(
    source: &S,
    seeds: Vec<ScoredUrl>,
    conference: &Conference,
    config: &ExplorerConfig,
    scoring: &ScoringConfig,
) -> Vec<ScoredUrl> {
    let filter = LinkFilterOptions::new(conference.domain.clone())
        .conference_name(conference.short_name.clone());

    let mut frontier = Frontier::new();
    for seed in seeds {
        frontier.push(seed);
    }

    let mut explored = Vec::new();
    let mut fetched = 0;

    while fetched < config.max_pages {
        let Some(node) = frontier.pop() else {
            break;
        };

        if node.depth >= config.max_depth {
            debug!(url = %node.url, depth = node.depth, "Depth limit reached, not expanding");
            explored.push(node);
            continue;
        }

        fetched += 1;
        let (_, page) = source.fetch(&node.url).await;
        if let Some(page) = page {
            if normalize_url(&page.final_url) != normalize_url(&node.url) {
                frontier.mark_seen(&page.final_url);
            }
            let mut queued = 0;
            for child in expand(&node, &page, &filter, conference, config, scoring) {
                if frontier.push(child) {
                    queued += 1;
                }
            }
            debug!(url = %node.url, queued, "Expanded page");
        }
        explored.push(node);
    }

    let remaining = frontier.into_remaining();
    info!(
        fetched,
        explored = explored.len(),
        unexpanded = remaining.len(),
        "Graph exploration finished"
    );
    explored.extend(remaining);
    explored
}

/// Scored children of `parent` worth queueing
fn expand(
    parent: &ScoredUrl,
    page: &FetchedPage,
    filter: &LinkFilterOptions,
    conference: &Conference,
    config: &ExplorerConfig,
    scoring: &ScoringConfig,
) -> Vec<ScoredUrl> {
    let links = filter_links(extract_links(&page.body, &page.final_url), filter);
    let depth = parent.depth + 1;

    links
        .into_iter()
        .filter(should_explore_link)
        .filter_map(|link| {
            let same_domain = is_same_domain(&link.url, &conference.domain);
            let link_score =
                parent.graph_score() + score_link(&link.text, &link.url, depth, same_domain, scoring);
            let child = ScoredUrl::child(parent, link.url, link.text, link_score);
            if child.graph_score() < config.min_link_score {
                debug!(url = %child.url, score = child.graph_score(), "Link score below threshold");
                return None;
            }
            Some(child)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SourceType;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    /// In-memory site that records every fetch
    #[derive(Default)]
    struct StaticSite {
        pages: HashMap<String, String>,
        fetched: Mutex<Vec<String>>,
    }

    impl StaticSite {
        fn page(mut self, url: &str, links: &[(&str, &str)]) -> Self {
            let body = links
                .iter()
                .map(|(href, text)| format!(r#"<a href="{href}">{text}</a>"#))
                .collect::<String>();
            self.pages
                .insert(url.to_string(), format!("<html><body>{body}</body></html>"));
            self
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    impl PageSource for StaticSite {
        fn fetch(&self, url: &str) -> impl Future<Output = (String, Option<FetchedPage>)> + Send {
            self.fetched.lock().unwrap().push(url.to_string());
            let page = self
                .pages
                .get(url)
                .map(|body| FetchedPage::new(url, body.clone()));
            let url = url.to_string();
            async move { (url, page) }
        }
    }

    fn conference() -> Conference {
        Conference {
            short_name: "CONF".to_string(),
            display_name: "Conference".to_string(),
            domain: "conf.org".to_string(),
            ..Conference::default()
        }
    }

    fn homepage_seed() -> ScoredUrl {
        ScoredUrl::seed("https://conf.org", 6.0, SourceType::Homepage, "Homepage")
    }

    async fn explore(site: &StaticSite, config: &ExplorerConfig) -> Vec<ScoredUrl> {
        explore_graph(
            site,
            vec![homepage_seed()],
            &conference(),
            config,
            &ScoringConfig::default(),
        )
        .await
    }

    #[tokio::test]
    async fn test_reviewer_link_child_score() {
        let site = StaticSite::default().page(
            "https://conf.org",
            &[("https://conf.org/cfr", "Call for Reviewers")],
        );
        let explored = explore(&site, &ExplorerConfig::default()).await;
        let scoring = ScoringConfig::default();

        let child = explored
            .iter()
            .find(|n| n.url == "https://conf.org/cfr")
            .unwrap();
        assert_eq!(child.depth, 1);
        assert_eq!(child.parent_url.as_deref(), Some("https://conf.org"));
        assert!(child.link_score >= scoring.link_reviewer + scoring.link_same_domain);
    }

    #[tokio::test]
    async fn test_never_visits_url_twice() {
        let site = StaticSite::default()
            .page(
                "https://conf.org",
                &[
                    ("/pc", "Program Committee"),
                    ("/cfr", "Call for Reviewers"),
                    ("https://www.conf.org/pc/", "PC"),
                ],
            )
            .page(
                "https://conf.org/pc",
                &[("/cfr", "Reviewers"), ("/", "Call home")],
            )
            .page("https://conf.org/cfr", &[("/pc#members", "Committee")]);

        let explored = explore(&site, &ExplorerConfig::default()).await;

        let mut fetched = site.fetched();
        let total = fetched.len();
        fetched.sort();
        fetched.dedup();
        assert_eq!(fetched.len(), total);
        assert_eq!(total, 3);

        let mut urls: Vec<_> = explored.iter().map(|n| normalize_url(&n.url)).collect();
        let count = urls.len();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), count);
    }

    #[tokio::test]
    async fn test_depth_limit() {
        let site = StaticSite::default()
            .page("https://conf.org", &[("/call-1", "Call one")])
            .page("https://conf.org/call-1", &[("/call-2", "Call two")])
            .page("https://conf.org/call-2", &[("/call-3", "Call three")])
            .page("https://conf.org/call-3", &[("/call-4", "Call four")]);

        let config = ExplorerConfig::builder()
            .max_depth(2)
            .min_link_score(-100.0)
            .build();
        let explored = explore(&site, &config).await;

        assert_eq!(site.fetched(), vec!["https://conf.org", "https://conf.org/call-1"]);
        assert!(explored.iter().all(|n| n.depth <= 2));
        assert!(explored.iter().any(|n| n.url == "https://conf.org/call-2" && n.depth == 2));
    }

    #[tokio::test]
    async fn test_budget_appends_unexpanded() {
        let site = StaticSite::default().page(
            "https://conf.org",
            &[("/reviewers", "Reviewers"), ("/committee", "Committee")],
        );
        let config = ExplorerConfig::builder().max_pages(1).build();
        let explored = explore(&site, &config).await;

        assert_eq!(site.fetched().len(), 1);
        assert_eq!(explored.len(), 3);
        // reviewer bucket outranks committee bucket
        assert_eq!(explored[1].url, "https://conf.org/reviewers");
        assert_eq!(explored[2].url, "https://conf.org/committee");
    }

    #[tokio::test]
    async fn test_expands_highest_score_first() {
        let site = StaticSite::default()
            .page(
                "https://conf.org",
                &[("/workshops", "Workshops"), ("/reviewers", "Call for Reviewers")],
            )
            .page("https://conf.org/workshops", &[])
            .page("https://conf.org/reviewers", &[]);

        explore(&site, &ExplorerConfig::default()).await;
        assert_eq!(
            site.fetched(),
            vec![
                "https://conf.org",
                "https://conf.org/reviewers",
                "https://conf.org/workshops"
            ]
        );
    }

    #[tokio::test]
    async fn test_min_link_score() {
        let site = StaticSite::default().page(
            "https://conf.org",
            &[("/cfr", "Call for Reviewers"), ("/workshops", "Workshops")],
        );
        // reviewer link scores 10, workshop link 7
        let config = ExplorerConfig::builder().min_link_score(8.0).build();
        let explored = explore(&site, &config).await;

        assert!(explored.iter().any(|n| n.url == "https://conf.org/cfr"));
        assert!(!explored.iter().any(|n| n.url == "https://conf.org/workshops"));
    }

    #[tokio::test]
    async fn test_out_of_scope_links_dropped() {
        let site = StaticSite::default().page(
            "https://conf.org",
            &[
                ("https://other.com/call", "Call for Papers"),
                ("/venue", "Venue"),
                ("/paper.pdf", "Call PDF"),
                ("/cfr", "Call for Reviewers"),
            ],
        );
        let config = ExplorerConfig::builder().max_depth(1).build();
        let explored = explore(&site, &config).await;

        let urls: Vec<_> = explored.iter().map(|n| n.url.as_str()).collect();
        assert_eq!(urls, vec!["https://conf.org", "https://conf.org/cfr"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_still_recorded() {
        let site = StaticSite::default();
        let explored = explore(&site, &ExplorerConfig::default()).await;
        assert_eq!(explored.len(), 1);
        assert_eq!(site.fetched(), vec!["https://conf.org"]);
    }
}
