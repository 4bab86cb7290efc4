//! # Discovery Pipeline Module
//!
//! Ties the components together. For each conference the pipeline:
//!
//! 1. Searches for the homepage and for reviewer pages hosted elsewhere
//! 2. Explores the link graph from those seeds
//! 3. Content-checks the promising, not yet known URLs
//! 4. Turns each match into a `Candidate` with a role, label and decision
//!
//! ## Key Components
//!
//! - `DiscoveryConfig`: Every tunable of a run in one place
//! - `discover_conference`: The steps above for one conference
//! - `run_discovery`: Sequential batch with per-conference failure isolation
//! - `DiscoveryReport`: Ranked, deduplicated candidates plus a success tally

mod batch;
mod candidate;
mod config;
mod discover;

pub use batch::{
    ConferenceFailure, DiscoveryReport, in_recruitment_window, rank_candidates, run_discovery,
    run_discovery_with,
};
pub use candidate::{Candidate, Label, Role};
pub use config::{DiscoveryConfig, DiscoveryConfigBuilder};
pub use discover::{discover_conference, find_seeds};
