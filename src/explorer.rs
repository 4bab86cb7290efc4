//! # Graph Explorer Module
//!
//! Score-driven breadth-first search over a conference's web presence.
//!
//! ## Key Components
//!
//! - `explore_graph`: Expand seeds into a scored, deduplicated set of URLs
//! - `Frontier`: Max-priority queue keyed by graph score with insertion-order ties
//! - `ExplorerConfig`: Depth, page budget, expansion threshold and seed scores
//!
//! ## Features
//!
//! - Deterministic expansion order for equal scores
//! - Deduplication on insertion by normalized URL, including redirect targets
//! - Bounded by depth and a per-conference fetch budget
//! - Unexpanded queue entries are still returned with their scores

mod config;
mod frontier;
mod graph;

pub use config::{ExplorerConfig, ExplorerConfigBuilder};
pub use frontier::Frontier;
pub use graph::explore_graph;
