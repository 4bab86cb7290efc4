//! # Scoring Module
//!
//! Four independent scoring layers feed one categorical decision:
//!
//! 1. **Search**: how well a search hit matches the conference, plus a bonus
//!    keyed to the query category
//! 2. **Link**: keyword bucket, domain, file type and depth of a discovered link
//! 3. **Content**: lexical signals in the page text
//! 4. **Final**: weighted sum of search, graph (search + link) and content,
//!    classified into accept, gray zone or reject
//!
//! Derived scores are computed on demand from a [`ScoredUrl`]'s base fields
//! and never stored.

mod config;
mod layers;
mod signals;

pub use config::{ScoringConfig, ScoringConfigBuilder};
pub use layers::{
    QueryCategory, classify_decision, compute_final_score, page_match_score, score_link,
    score_search_result,
};
pub use signals::{
    HIGH_CONFIDENCE_SIGNALS, MEDIUM_CONFIDENCE_SIGNALS, NEGATIVE_SIGNALS, RECOVERY_TERMS,
    SignalScore, has_positive_signals, score_content_signals,
};

pub(crate) use signals::window_bounds;

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a URL entered the exploration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Best homepage candidate from the search step
    Homepage,
    /// Hit of the reviewer search query
    ReviewerSearch,
    /// Link discovered while exploring
    GraphLink,
}

/// Categorical outcome of the final score, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Reject,
    GrayZone,
    Accept,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Decision::Accept => "accept",
            Decision::GrayZone => "gray_zone",
            Decision::Reject => "reject",
        };
        f.write_str(label)
    }
}

/// A URL with the base scores of each layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredUrl {
    /// Normalized URL
    pub url: String,

    /// URL of the page this link was found on
    pub parent_url: Option<String>,

    /// BFS depth, seeds are at 0
    pub depth: u32,

    pub search_score: f64,
    pub link_score: f64,
    pub content_score: f64,

    pub source_type: SourceType,

    /// Anchor text or search-hit title
    pub text: String,

    /// Came from the reviewer search query
    pub from_reviewer_search: bool,
}

impl ScoredUrl {
    /// A depth-0 exploration seed
    pub fn seed(
        url: impl Into<String>,
        search_score: f64,
        source_type: SourceType,
        text: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            parent_url: None,
            depth: 0,
            search_score,
            link_score: 0.0,
            content_score: 0.0,
            from_reviewer_search: source_type == SourceType::ReviewerSearch,
            source_type,
            text: text.into(),
        }
    }

    /// A new node one level below `parent`
    pub fn child(
        parent: &ScoredUrl,
        url: impl Into<String>,
        text: impl Into<String>,
        link_score: f64,
    ) -> Self {
        Self {
            url: url.into(),
            parent_url: Some(parent.url.clone()),
            depth: parent.depth + 1,
            search_score: 0.0,
            link_score,
            content_score: 0.0,
            source_type: SourceType::GraphLink,
            text: text.into(),
            from_reviewer_search: false,
        }
    }

    /// Copy of this node carrying a content score
    pub fn with_content_score(&self, content_score: f64) -> Self {
        Self {
            content_score,
            ..self.clone()
        }
    }

    /// Search plus link score; drives BFS priority
    pub fn graph_score(&self) -> f64 {
        self.search_score + self.link_score
    }

    /// Weighted combination of all layers
    pub fn final_score(&self, config: &ScoringConfig) -> f64 {
        compute_final_score(
            self.search_score,
            self.graph_score(),
            self.content_score,
            config,
        )
    }

    /// Decision for this node's final score
    pub fn decision(&self, config: &ScoringConfig) -> Decision {
        classify_decision(self.final_score(config), config)
    }
}
