//! # reviewer-calls - Call-for-Reviewers Discovery
//!
//! This crate finds pages on the open web that invite researchers to join the
//! reviewing or program committees of academic conferences, and ranks them by
//! confidence so only strong candidates are proposed for a curated dataset.
//!
//! ## Features
//!
//! - Resilient concurrent page fetching with retry and backoff
//! - Homepage discovery through pluggable search providers with fallback
//! - Priority-driven exploration of each conference's link graph
//! - Four-layer numeric scoring with an accept / gray zone / reject decision
//! - Content validation with evidence snippets, role and label guesses
//! - Sequential batch runs where one conference's failure never aborts the rest
//!
//! ## Example
//!
//! ```rust,no_run
//! use reviewer_calls::conference::{ConferenceFilter, guess_year, load_conferences};
//! use reviewer_calls::known_urls::KnownUrls;
//! use reviewer_calls::pipeline::{DiscoveryConfig, run_discovery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let conferences = ConferenceFilter::new()
//!         .rank("A")
//!         .apply(load_conferences("conferences.yaml")?);
//!     let known = KnownUrls::load("calls.yaml", None, Vec::<String>::new())?;
//!     let year = guess_year(chrono::Local::now().date_naive());
//!
//!     let report = run_discovery(&conferences, &known, year, &DiscoveryConfig::default(), None).await?;
//!     for candidate in &report.candidates {
//!         println!("{} {} {}", candidate.decision, candidate.conference, candidate.url());
//!     }
//!     Ok(())
//! }
//! ```

mod error;

pub mod conference;
pub mod explorer;
pub mod fetcher;
pub mod filters;
pub mod known_urls;
pub mod parser;
pub mod pipeline;
pub mod scoring;
pub mod search;
pub mod urls;
pub mod validator;

pub use error::{Error, Result};

/// Error types and the discovery report types most callers need
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::pipeline::{Candidate, DiscoveryConfig, DiscoveryReport};
    pub use crate::scoring::{Decision, ScoredUrl};
}
