//! Already-known URLs
//!
//! Pages already in the dataset, pages a human rejected, and any extra URLs
//! from the command line are never proposed again. Everything is stored in
//! normalized form.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::conference::{RegistryError, read_yaml};
use crate::urls::normalize_url;

#[derive(Deserialize)]
struct CallsFile {
    #[serde(default)]
    calls: Vec<CallEntry>,
}

/// A dataset entry, either with one `url` or a list of `urls`
#[derive(Deserialize)]
struct CallEntry {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    urls: Option<Vec<UrlEntry>>,
}

#[derive(Deserialize)]
struct UrlEntry {
    url: String,
}

#[derive(Deserialize)]
struct RejectedFile {
    #[serde(default)]
    rejected_urls: Vec<UrlEntry>,
}

/// Normalized URLs of every page already in the dataset.
///
/// The calls file is required.
pub fn load_call_urls(path: impl AsRef<Path>) -> Result<HashSet<String>, RegistryError> {
    let file: CallsFile = read_yaml(path.as_ref())?;
    let urls = file
        .calls
        .into_iter()
        .flat_map(|call| match call.urls {
            Some(urls) => urls.into_iter().map(|u| u.url).collect(),
            None => call.url.into_iter().collect::<Vec<_>>(),
        })
        .map(|url| normalize_url(&url))
        .collect();
    Ok(urls)
}

/// Normalized URLs of previously rejected pages; a missing file is empty
pub fn load_rejected_urls(path: impl AsRef<Path>) -> Result<HashSet<String>, RegistryError> {
    let path = path.as_ref();
    let file: RejectedFile = match read_yaml(path) {
        Ok(file) => file,
        Err(RegistryError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No rejected URLs file");
            return Ok(HashSet::new());
        }
        Err(e) => return Err(e),
    };
    Ok(file
        .rejected_urls
        .into_iter()
        .map(|entry| normalize_url(&entry.url))
        .collect())
}

/// Set of normalized URLs that must not be rediscovered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownUrls {
    urls: HashSet<String>,
}

impl KnownUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of the calls file, the optional rejected file and `extra` URLs
    pub fn load<I, S>(
        calls: impl AsRef<Path>,
        rejected: Option<&Path>,
        extra: I,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known = Self {
            urls: load_call_urls(calls)?,
        };
        let dataset = known.len();

        let rejected = match rejected {
            Some(path) => load_rejected_urls(path)?,
            None => HashSet::new(),
        };
        let rejected_count = rejected.len();
        known.urls.extend(rejected);
        known.extend(extra);

        info!(
            dataset,
            rejected = rejected_count,
            total = known.len(),
            "Loaded known URLs"
        );
        Ok(known)
    }

    pub fn insert(&mut self, url: &str) -> bool {
        self.urls.insert(normalize_url(url))
    }

    /// Whether `url` is known, in any spelling that normalizes the same
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(&normalize_url(url))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for KnownUrls {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for url in iter {
            self.insert(url.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownUrls {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut known = Self::new();
        known.extend(iter);
        known
    }
}
