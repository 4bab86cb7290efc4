//! The four scoring layers: search, link, final and decision

use serde::{Deserialize, Serialize};

use crate::conference::Conference;
use crate::scoring::{Decision, ScoringConfig};
use crate::search::SearchHit;
use crate::urls::{is_same_domain, path_of};

/// Link keyword buckets, highest priority first
const REVIEWER_TERMS: &[&str] = &["reviewer", "reviewers", "review"];
const PC_TERMS: &[&str] = &[
    "pc",
    "program-committee",
    "programme-committee",
    "program committee",
];
const COMMITTEE_TERMS: &[&str] = &[
    "committee",
    "member",
    "members",
    "area-chair",
    "area chair",
    "spc",
    "aec",
    "artifact",
    "shadow",
];
const CALL_TERMS: &[&str] = &[
    "call",
    "calls",
    "nomination",
    "nominations",
    "nominate",
    "recruitment",
    "recruit",
    "invite",
    "invitation",
    "volunteer",
    "join",
    "participate",
    "apply",
    "register",
    "signup",
    "sign-up",
];

/// Extensions penalized as non-HTML link targets
const NON_HTML_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".ppt", ".pptx", ".zip", ".tar"];

/// Category of the search query a hit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    Homepage,
    Reviewer,
    Pc,
    Call,
}

impl QueryCategory {
    /// Fixed bonus for hits of this category
    pub fn bonus(self, config: &ScoringConfig) -> f64 {
        match self {
            QueryCategory::Homepage => config.query_homepage,
            QueryCategory::Reviewer => config.query_reviewer,
            QueryCategory::Pc => config.query_pc,
            QueryCategory::Call => config.query_call,
        }
    }
}

/// How well a search hit matches the conference, without the category bonus.
///
/// Zero means the hit is not about this conference at all.
pub fn page_match_score(
    hit: &SearchHit,
    conference: &Conference,
    year: i32,
    config: &ScoringConfig,
) -> f64 {
    let url = hit.url.to_lowercase();
    let title = hit.title.to_lowercase();
    let snippet = hit.snippet.to_lowercase();
    let in_text = |needle: &str| !needle.is_empty() && (title.contains(needle) || snippet.contains(needle));

    let abbr = conference.short_name.to_lowercase();
    let name = conference.display_name.to_lowercase();
    let year = year.to_string();

    let mut score = 0.0;
    if !abbr.is_empty() && url.contains(&abbr) {
        score += config.search_abbr_in_url;
    }
    if is_same_domain(&hit.url, &conference.domain) {
        score += config.search_same_domain;
    }
    if in_text(&abbr) {
        score += config.search_abbr_in_text;
    }
    if in_text(&name) {
        score += config.search_name_in_text;
    }
    if in_text(&year) {
        score += config.search_year_in_text;
    }
    score
}

/// Search-result score: page match plus the query category bonus
pub fn score_search_result(
    hit: &SearchHit,
    conference: &Conference,
    year: i32,
    category: QueryCategory,
    config: &ScoringConfig,
) -> f64 {
    page_match_score(hit, conference, year, config) + category.bonus(config)
}

/// Score a link for BFS priority.
///
/// Only the highest-priority keyword bucket found in the anchor text or URL
/// path counts. Domain bonus or penalty, the non-HTML penalty and a linear
/// depth penalty are added on top.
pub fn score_link(
    text: &str,
    url: &str,
    depth: u32,
    same_domain: bool,
    config: &ScoringConfig,
) -> f64 {
    let path = path_of(url);
    let combined = format!("{} {}", text.to_lowercase(), path);
    let has = |terms: &[&str]| terms.iter().any(|t| combined.contains(t));

    let mut score = if has(REVIEWER_TERMS) {
        config.link_reviewer
    } else if has(PC_TERMS) {
        config.link_pc
    } else if has(COMMITTEE_TERMS) {
        config.link_committee
    } else if has(CALL_TERMS) {
        config.link_call
    } else {
        0.0
    };

    score += if same_domain {
        config.link_same_domain
    } else {
        config.link_external
    };

    if NON_HTML_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        score += config.link_non_html;
    }

    score - f64::from(depth) * config.depth_penalty
}

/// Weighted combination of the search, graph and content scores
pub fn compute_final_score(
    search_score: f64,
    graph_score: f64,
    content_score: f64,
    config: &ScoringConfig,
) -> f64 {
    search_score * config.weight_search
        + graph_score * config.weight_graph
        + content_score * config.weight_content
}

/// Three-way classification of a final score
pub fn classify_decision(final_score: f64, config: &ScoringConfig) -> Decision {
    if final_score >= config.accept_threshold {
        Decision::Accept
    } else if final_score >= config.gray_zone_threshold {
        Decision::GrayZone
    } else {
        Decision::Reject
    }
}
