//! Error types for the search providers

use thiserror::Error;

use crate::error::Error as CrateError;

/// Errors that can occur while querying a search provider
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request to the provider failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider returned status {0}")]
    Status(u16),

    /// Provider response could not be understood
    #[error("provider error: {0}")]
    Provider(String),

    /// Unknown provider or filter option
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

impl From<SearchError> for CrateError {
    fn from(err: SearchError) -> Self {
        CrateError::Search(err.to_string())
    }
}
