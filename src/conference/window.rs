//! Reviewer recruitment window

use super::Conference;

/// Venues with rolling review cycles, always considered recruiting
pub const ROLLING_REVIEW_CONFERENCES: &[&str] =
    &["ACL", "EMNLP", "NAACL", "EACL", "ICLR", "ICML", "NEURIPS"];

/// Months before the conference during which reviewers are recruited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecruitmentWindow {
    /// Short names always in window, compared case-insensitively
    pub rolling: Vec<String>,
    pub min_months_before: u32,
    pub max_months_before: u32,
}

impl Default for RecruitmentWindow {
    fn default() -> Self {
        Self {
            rolling: ROLLING_REVIEW_CONFERENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_months_before: 2,
            max_months_before: 10,
        }
    }
}

impl RecruitmentWindow {
    /// Calendar months (1-12) during which a conference held in
    /// `conference_month` is recruiting
    pub fn active_months(&self, conference_month: u32) -> Vec<u32> {
        (self.min_months_before..=self.max_months_before)
            .map(|before| {
                (i64::from(conference_month) - i64::from(before) - 1).rem_euclid(12) as u32 + 1
            })
            .collect()
    }

    /// Whether `conference` is plausibly recruiting in `current_month`.
    ///
    /// Rolling-review venues and venues with no known month are always in
    /// window.
    pub fn contains(&self, conference: &Conference, current_month: u32) -> bool {
        if self
            .rolling
            .iter()
            .any(|r| r.eq_ignore_ascii_case(&conference.short_name))
        {
            return true;
        }
        if conference.has_unknown_dates() {
            return true;
        }

        conference
            .recruitment_months
            .iter()
            .filter(|&&m| m != 0)
            .any(|&m| self.active_months(m).contains(&current_month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conf(short: &str, months: Vec<u32>) -> Conference {
        Conference {
            short_name: short.to_string(),
            recruitment_months: months,
            ..Conference::default()
        }
    }

    #[test]
    fn test_active_months_wrap() {
        let window = RecruitmentWindow::default();
        // August conference: recruiting from October of the previous year to June
        assert_eq!(window.active_months(8), vec![6, 5, 4, 3, 2, 1, 12, 11, 10]);
        assert_eq!(window.active_months(2), vec![12, 11, 10, 9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_rolling_review_always_in_window() {
        let window = RecruitmentWindow::default();
        for month in 1..=12 {
            assert!(window.contains(&conf("NeurIPS", vec![12]), month));
            assert!(window.contains(&conf("acl", vec![]), month));
        }
    }

    #[test]
    fn test_unknown_date_in_window() {
        let window = RecruitmentWindow::default();
        assert!(window.contains(&conf("CONF", vec![0]), 7));
        assert!(window.contains(&conf("CONF", vec![]), 7));
    }

    #[test]
    fn test_known_date_window() {
        let window = RecruitmentWindow::default();
        let ijcai = conf("IJCAI", vec![8]);
        assert!(window.contains(&ijcai, 3));
        assert!(window.contains(&ijcai, 10));
        assert!(!window.contains(&ijcai, 7));
        assert!(!window.contains(&ijcai, 8));
        assert!(!window.contains(&ijcai, 9));
    }

    #[test]
    fn test_multiple_dates() {
        let window = RecruitmentWindow::default();
        let conf = conf("CONF", vec![3, 8]);
        // 7 is outside the August window but inside the March one
        assert!(window.contains(&conf, 7));
        assert!(window.contains(&conf, 1));
    }

    #[test]
    fn test_custom_rolling_list() {
        let window = RecruitmentWindow {
            rolling: Vec::new(),
            ..RecruitmentWindow::default()
        };
        assert!(!window.contains(&conf("ICML", vec![7]), 6));
    }
}
