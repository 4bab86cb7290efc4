//! # Discovery Configuration Module
//!
//! One value carrying every tunable of a discovery run: the fetcher, scoring
//! and explorer settings, the search backend and the recruitment window.

use crate::conference::RecruitmentWindow;
use crate::explorer::ExplorerConfig;
use crate::fetcher::FetcherConfig;
use crate::scoring::ScoringConfig;
use crate::search::{DateRange, ProviderKind};

/// Search results requested per query
const DEFAULT_RESULTS_PER_QUERY: usize = 10;

/// Configuration for a discovery run
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    pub fetcher: FetcherConfig,
    pub scoring: ScoringConfig,
    pub explorer: ExplorerConfig,

    /// Preferred search backend
    pub provider: ProviderKind,

    /// API key for Serper
    pub serper_key: Option<String>,

    /// Recency filter passed to the search backend
    pub date_range: DateRange,

    /// Hits requested for each search query
    pub results_per_query: usize,

    /// Which conferences are worth searching this month
    pub window: RecruitmentWindow,

    /// Keep candidates whose decision is reject in the report
    pub include_rejected: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            scoring: ScoringConfig::default(),
            explorer: ExplorerConfig::default(),
            provider: ProviderKind::default(),
            serper_key: None,
            date_range: DateRange::default(),
            results_per_query: DEFAULT_RESULTS_PER_QUERY,
            window: RecruitmentWindow::default(),
            include_rejected: false,
        }
    }
}

impl DiscoveryConfig {
    /// Create a new builder
    pub fn builder() -> DiscoveryConfigBuilder {
        DiscoveryConfigBuilder::new()
    }
}

/// Builder for DiscoveryConfig
#[derive(Debug, Default)]
pub struct DiscoveryConfigBuilder {
    config: DiscoveryConfig,
}

impl DiscoveryConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DiscoveryConfig::default(),
        }
    }

    pub fn fetcher(mut self, fetcher: FetcherConfig) -> Self {
        self.config.fetcher = fetcher;
        self
    }

    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    pub fn explorer(mut self, explorer: ExplorerConfig) -> Self {
        self.config.explorer = explorer;
        self
    }

    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.config.provider = provider;
        self
    }

    pub fn serper_key(mut self, key: Option<String>) -> Self {
        self.config.serper_key = key;
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.config.date_range = date_range;
        self
    }

    pub fn results_per_query(mut self, results: usize) -> Self {
        self.config.results_per_query = results.max(1);
        self
    }

    pub fn window(mut self, window: RecruitmentWindow) -> Self {
        self.config.window = window;
        self
    }

    pub fn include_rejected(mut self, include: bool) -> Self {
        self.config.include_rejected = include;
        self
    }

    pub fn build(self) -> DiscoveryConfig {
        self.config
    }
}
