//! # Conference Registry Module
//!
//! Reference data about the conferences to search: identity, home domain,
//! ranking, research area and the month(s) each one is held. Read-only to
//! the rest of the crate.
//!
//! ## Key Components
//!
//! - `Conference`: One registry entry
//! - `load_conferences`: Parse a `conferences.yaml` document
//! - `ConferenceFilter`: Short-name, rank, area and limit selection
//! - `RecruitmentWindow`: Whether a conference is plausibly recruiting now
//! - `guess_year`: The conference year a run should target

mod error;
mod registry;
mod window;

pub use error::RegistryError;
pub use registry::{ConferenceFilter, VALID_AREAS, VALID_RANKS, load_conferences};
pub use window::{ROLLING_REVIEW_CONFERENCES, RecruitmentWindow};

pub(crate) use registry::read_yaml;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Rankings of a conference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    /// CCF rank: A, B or C
    #[serde(default)]
    pub ccf: Option<String>,

    /// CORE rank, e.g. A*
    #[serde(default)]
    pub core: Option<String>,
}

/// A conference registry entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    /// Abbreviation, e.g. `IJCAI`
    #[serde(rename = "short")]
    pub short_name: String,

    /// Full name
    #[serde(rename = "name", default)]
    pub display_name: String,

    /// Home domain without scheme, e.g. `ijcai.org`
    #[serde(default)]
    pub domain: String,

    /// Research area code, e.g. `AI`
    #[serde(rename = "area", default)]
    pub area_code: String,

    #[serde(default)]
    pub rank: Rank,

    /// Months (1-12) the conference is held; 0 means unknown
    #[serde(
        rename = "conf_date",
        default,
        deserialize_with = "deserialize_months"
    )]
    pub recruitment_months: Vec<u32>,
}

impl Conference {
    /// Whether every scheduled month is unknown
    pub fn has_unknown_dates(&self) -> bool {
        self.recruitment_months.iter().all(|&m| m == 0)
    }
}

/// `conf_date` is either a single month or a list of months
fn deserialize_months<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Months {
        One(u32),
        Many(Vec<u32>),
    }

    Ok(match Option::<Months>::deserialize(deserializer)? {
        Some(Months::One(m)) => vec![m],
        Some(Months::Many(ms)) => ms,
        None => Vec::new(),
    })
}

/// Conference year to target on `today`: this year through June, next year
/// from July on
pub fn guess_year(today: NaiveDate) -> i32 {
    if today.month() <= 6 {
        today.year()
    } else {
        today.year() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_entry() {
        let yaml = r#"
short: IJCAI
name: International Joint Conference on Artificial Intelligence
domain: ijcai.org
area: AI
rank:
  ccf: A
  core: A*
conf_date: 8
"#;
        let conf: Conference = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(conf.short_name, "IJCAI");
        assert_eq!(conf.area_code, "AI");
        assert_eq!(conf.rank.ccf.as_deref(), Some("A"));
        assert_eq!(conf.rank.core.as_deref(), Some("A*"));
        assert_eq!(conf.recruitment_months, vec![8]);
    }

    #[test]
    fn test_deserialize_month_list_and_missing() {
        let conf: Conference = serde_yaml::from_str("short: X\nconf_date: [3, 8]").unwrap();
        assert_eq!(conf.recruitment_months, vec![3, 8]);

        let conf: Conference = serde_yaml::from_str("short: Y").unwrap();
        assert!(conf.recruitment_months.is_empty());
        assert!(conf.has_unknown_dates());
    }

    #[test]
    fn test_guess_year() {
        let date = |m, d| NaiveDate::from_ymd_opt(2026, m, d).unwrap();
        assert_eq!(guess_year(date(1, 1)), 2026);
        assert_eq!(guess_year(date(6, 30)), 2026);
        assert_eq!(guess_year(date(7, 1)), 2027);
        assert_eq!(guess_year(date(12, 31)), 2027);
    }
}
