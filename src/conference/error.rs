//! Error types for registry and known-URL loading

use std::path::PathBuf;

use thiserror::Error;

use crate::error::Error as CrateError;

/// Errors that can occur while loading reference data
#[derive(Debug, Error)]
pub enum RegistryError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid YAML for the expected shape
    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Rank or area filter outside the known values
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

impl From<RegistryError> for CrateError {
    fn from(err: RegistryError) -> Self {
        CrateError::Registry(err.to_string())
    }
}
