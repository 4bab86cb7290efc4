//! Error types for the reviewer-calls crate

use thiserror::Error;

/// Result type for reviewer-calls operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reviewer-calls operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading input files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Page fetching error
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Search provider error
    #[error("Search error: {0}")]
    Search(String),

    /// Conference registry or known-URL loading error
    #[error("Registry error: {0}")]
    Registry(String),

    /// A single conference's discovery run failed
    #[error("Discovery failed for {conference}: {message}")]
    Discovery {
        /// Conference short name
        conference: String,
        /// Failure description
        message: String,
    },

    /// Other errors
    #[error("{0}")]
    Other(String),
}
