//! # Link Filters Module
//!
//! Decides which discovered links are worth following and which are worth
//! reading. Every rejection here is a deterministic heuristic, not an error.
//!
//! ## Key Components
//!
//! - `filter_links`: Domain scope, obviously-useless and navigation-label filters
//! - `should_explore_link`: Recruitment keyword versus stop-word decision
//! - `has_promising_keywords`: Anchor texts worth content analysis
//! - `is_trusted_external_platform`: Off-domain hosts allowed with evidence
//! - `is_obviously_useless`: Documents, media, social networks and navigation pages

mod domain;
pub mod keywords;
mod links;
mod useless;

pub use domain::is_trusted_external_platform;
pub use links::{
    LinkFilterOptions, filter_links, has_filter_keyword, has_promising_keywords, has_stop_word,
    should_explore_link, should_skip_link_text,
};
pub use useless::is_obviously_useless;
