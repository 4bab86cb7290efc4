//! Registry loading and selection

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Conference, RegistryError};

/// CCF ranks accepted by the rank filter
pub const VALID_RANKS: &[&str] = &["A", "B", "C"];

/// Area codes accepted by the area filter
pub const VALID_AREAS: &[&str] = &["AI", "CG", "CT", "DB", "DS", "HI", "MX", "NW", "SC", "SE"];

#[derive(Deserialize)]
struct Registry {
    #[serde(default)]
    conferences: Vec<Conference>,
}

/// Read and parse a YAML file
pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, RegistryError> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| RegistryError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every conference of a `conferences.yaml` document, in file order
pub fn load_conferences(path: impl AsRef<Path>) -> Result<Vec<Conference>, RegistryError> {
    let path = path.as_ref();
    let registry: Registry = read_yaml(path)?;
    debug!(count = registry.conferences.len(), path = %path.display(), "Loaded conferences");
    Ok(registry.conferences)
}

/// User selection over the registry.
///
/// Values are compared case-insensitively; the limit applies last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConferenceFilter {
    pub conference: Option<String>,
    pub rank: Option<String>,
    pub area: Option<String>,
    pub limit: Option<usize>,
}

impl ConferenceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the conference with this short name
    pub fn conference(mut self, short_name: impl Into<String>) -> Self {
        self.conference = Some(short_name.into().to_uppercase());
        self
    }

    /// Keep only conferences with this CCF rank
    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into().to_uppercase());
        self
    }

    /// Keep only conferences in this area
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into().to_uppercase());
        self
    }

    /// Keep at most this many conferences
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Reject ranks, areas and limits that can never match
    pub fn validate(&self) -> Result<(), RegistryError> {
        if let Some(rank) = &self.rank {
            if !VALID_RANKS.contains(&rank.as_str()) {
                return Err(RegistryError::InvalidFilter(format!(
                    "rank '{rank}', expected one of {}",
                    VALID_RANKS.join(", ")
                )));
            }
        }
        if let Some(area) = &self.area {
            if !VALID_AREAS.contains(&area.as_str()) {
                return Err(RegistryError::InvalidFilter(format!(
                    "area '{area}', expected one of {}",
                    VALID_AREAS.join(", ")
                )));
            }
        }
        if self.limit == Some(0) {
            return Err(RegistryError::InvalidFilter(
                "limit must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply the selection, preserving registry order
    pub fn apply(&self, conferences: Vec<Conference>) -> Vec<Conference> {
        let selected = conferences.into_iter().filter(|c| {
            let short = self
                .conference
                .as_ref()
                .is_none_or(|s| c.short_name.eq_ignore_ascii_case(s));
            let rank = self
                .rank
                .as_ref()
                .is_none_or(|r| c.rank.ccf.as_deref().is_some_and(|ccf| ccf.eq_ignore_ascii_case(r)));
            let area = self
                .area
                .as_ref()
                .is_none_or(|a| c.area_code.eq_ignore_ascii_case(a));
            short && rank && area
        });

        match self.limit {
            Some(limit) => selected.take(limit).collect(),
            None => selected.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REGISTRY: &str = r#"
conferences:
  - short: IJCAI
    name: International Joint Conference on Artificial Intelligence
    domain: ijcai.org
    area: AI
    rank: {ccf: A, core: A*}
    conf_date: 8
  - short: AAAI
    name: AAAI Conference on Artificial Intelligence
    domain: aaai.org
    area: AI
    rank: {ccf: A}
    conf_date: 2
  - short: ICSE
    name: International Conference on Software Engineering
    domain: icse-conferences.org
    area: SE
    rank: {ccf: A}
    conf_date: [4, 5]
  - short: ECAI
    domain: ecai.eu
    area: AI
    rank: {ccf: B}
"#;

    fn write_registry(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn loaded() -> Vec<Conference> {
        let file = write_registry(REGISTRY);
        load_conferences(file.path()).unwrap()
    }

    #[test]
    fn test_load_conferences() {
        let confs = loaded();
        assert_eq!(confs.len(), 4);
        assert_eq!(confs[0].short_name, "IJCAI");
        assert_eq!(confs[2].recruitment_months, vec![4, 5]);
        assert!(confs[3].display_name.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_conferences("/nonexistent/conferences.yaml").unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let file = write_registry("conferences: [short: {");
        assert!(matches!(
            load_conferences(file.path()),
            Err(RegistryError::Yaml { .. })
        ));
    }

    #[test]
    fn test_load_empty_document() {
        let file = write_registry("{}");
        assert!(load_conferences(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_filter_by_rank_and_area() {
        let names = |confs: Vec<Conference>| {
            confs.into_iter().map(|c| c.short_name).collect::<Vec<_>>()
        };

        let filter = ConferenceFilter::new().rank("a").area("ai");
        assert_eq!(names(filter.apply(loaded())), vec!["IJCAI", "AAAI"]);

        let filter = ConferenceFilter::new().conference("icse");
        assert_eq!(names(filter.apply(loaded())), vec!["ICSE"]);

        let filter = ConferenceFilter::new().area("AI").limit(2);
        assert_eq!(names(filter.apply(loaded())), vec!["IJCAI", "AAAI"]);

        assert_eq!(ConferenceFilter::new().apply(loaded()).len(), 4);
    }

    #[test]
    fn test_filter_validation() {
        assert!(ConferenceFilter::new().rank("a").area("se").validate().is_ok());
        assert!(ConferenceFilter::new().rank("D").validate().is_err());
        assert!(ConferenceFilter::new().area("XX").validate().is_err());
        assert!(ConferenceFilter::new().limit(0).validate().is_err());
    }
}
