//! # Explorer Configuration Module
//!
//! Bounds and seed weights of the graph exploration.

/// Configuration for the graph explorer
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Nodes at this depth are recorded but never expanded
    pub max_depth: u32,

    /// Maximum number of pages fetched per conference
    pub max_pages: usize,

    /// Children with a lower graph score are not queued
    pub min_link_score: f64,

    /// Search score given to the homepage seed
    pub homepage_seed_score: f64,

    /// Search score given to reviewer-search seeds
    pub reviewer_seed_score: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            max_pages: 50,
            min_link_score: -2.0,
            homepage_seed_score: 6.0,
            reviewer_seed_score: 5.0,
        }
    }
}

impl ExplorerConfig {
    /// Create a new builder
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::new()
    }
}

/// Builder for ExplorerConfig
#[derive(Debug, Default)]
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl ExplorerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ExplorerConfig::default(),
        }
    }

    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    pub fn min_link_score(mut self, score: f64) -> Self {
        self.config.min_link_score = score;
        self
    }

    pub fn homepage_seed_score(mut self, score: f64) -> Self {
        self.config.homepage_seed_score = score;
        self
    }

    pub fn reviewer_seed_score(mut self, score: f64) -> Self {
        self.config.reviewer_seed_score = score;
        self
    }

    pub fn build(self) -> ExplorerConfig {
        self.config
    }
}
