//! # Scoring Configuration Module
//!
//! Every bonus, penalty, weight and threshold of the four scoring layers.
//!
//! ## Key Components
//!
//! - `ScoringConfig`: All scoring magnitudes with the tuned defaults
//! - `ScoringConfigBuilder`: Builder for the values most often overridden

use crate::error::{Error, Result};

/// Tolerance when checking that the final-score weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Configuration for the scorer
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Category bonus for hits of the homepage query
    pub query_homepage: f64,
    /// Category bonus for hits of the reviewer query
    pub query_reviewer: f64,
    /// Category bonus for hits of a PC query
    pub query_pc: f64,
    /// Category bonus for hits of a generic call query
    pub query_call: f64,

    /// Conference abbreviation appears in the hit URL
    pub search_abbr_in_url: f64,
    /// Hit is on the conference domain
    pub search_same_domain: f64,
    /// Conference abbreviation appears in the title or snippet
    pub search_abbr_in_text: f64,
    /// Conference full name appears in the title or snippet
    pub search_name_in_text: f64,
    /// Target year appears in the title or snippet
    pub search_year_in_text: f64,

    pub link_reviewer: f64,
    pub link_pc: f64,
    pub link_committee: f64,
    pub link_call: f64,
    pub link_same_domain: f64,
    pub link_external: f64,
    pub link_non_html: f64,
    /// Subtracted once per BFS level
    pub depth_penalty: f64,

    pub content_high: f64,
    pub content_medium: f64,
    /// Added per matched content keyword
    pub content_weak: f64,
    pub content_negative: f64,
    pub content_recovery: f64,
    pub content_multi_strong: f64,
    /// High-confidence hits needed for the multi-strong bonus
    pub multi_strong_min_hits: usize,
    /// Added when the target year appears in the page
    pub content_year: f64,
    /// Bytes either side of a medium signal searched for context terms
    pub context_window: usize,

    pub weight_search: f64,
    pub weight_graph: f64,
    pub weight_content: f64,

    /// Final score at or above which a candidate is accepted
    pub accept_threshold: f64,
    /// Final score at or above which a candidate is held for review
    pub gray_zone_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            query_homepage: 3.0,
            query_reviewer: 3.0,
            query_pc: 2.0,
            query_call: 1.0,
            search_abbr_in_url: 10.0,
            search_same_domain: 5.0,
            search_abbr_in_text: 3.0,
            search_name_in_text: 2.0,
            search_year_in_text: 2.0,
            link_reviewer: 3.0,
            link_pc: 3.0,
            link_committee: 2.0,
            link_call: 1.0,
            link_same_domain: 2.0,
            link_external: -1.0,
            link_non_html: -5.0,
            depth_penalty: 1.0,
            content_high: 4.0,
            content_medium: 2.0,
            content_weak: 1.0,
            content_negative: -5.0,
            content_recovery: 2.0,
            content_multi_strong: 3.0,
            multi_strong_min_hits: 3,
            content_year: 1.0,
            context_window: 200,
            weight_search: 0.4,
            weight_graph: 0.3,
            weight_content: 0.3,
            accept_threshold: 5.0,
            gray_zone_threshold: 2.0,
        }
    }
}

impl ScoringConfig {
    /// Create a new builder
    pub fn builder() -> ScoringConfigBuilder {
        ScoringConfigBuilder::new()
    }

    /// Check the weights sum to one and the thresholds are ordered
    pub fn validate(&self) -> Result<()> {
        let sum = self.weight_search + self.weight_graph + self.weight_content;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::Config(format!(
                "scoring weights must sum to 1.0, got {sum}"
            )));
        }
        if self.gray_zone_threshold > self.accept_threshold {
            return Err(Error::Config(format!(
                "gray zone threshold {} is above accept threshold {}",
                self.gray_zone_threshold, self.accept_threshold
            )));
        }
        Ok(())
    }
}

/// Builder for ScoringConfig
#[derive(Debug, Default)]
pub struct ScoringConfigBuilder {
    config: ScoringConfig,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }

    /// Set the final-score weights
    pub fn weights(mut self, search: f64, graph: f64, content: f64) -> Self {
        self.config.weight_search = search;
        self.config.weight_graph = graph;
        self.config.weight_content = content;
        self
    }

    /// Set the decision thresholds
    pub fn thresholds(mut self, accept: f64, gray_zone: f64) -> Self {
        self.config.accept_threshold = accept;
        self.config.gray_zone_threshold = gray_zone;
        self
    }

    /// Set the per-level depth penalty
    pub fn depth_penalty(mut self, penalty: f64) -> Self {
        self.config.depth_penalty = penalty;
        self
    }

    /// Set the medium-signal context window
    pub fn context_window(mut self, window: usize) -> Self {
        self.config.context_window = window;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ScoringConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_weights() {
        let result = ScoringConfig::builder().weights(0.5, 0.5, 0.5).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let result = ScoringConfig::builder().thresholds(1.0, 3.0).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScoringConfig::builder()
            .weights(0.5, 0.25, 0.25)
            .thresholds(6.0, 3.0)
            .depth_penalty(0.5)
            .build()
            .unwrap();
        assert_eq!(config.weight_search, 0.5);
        assert_eq!(config.accept_threshold, 6.0);
        assert_eq!(config.depth_penalty, 0.5);
    }
}
