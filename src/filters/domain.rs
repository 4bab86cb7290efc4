//! Trusted external hosting platforms

use chrono::{Datelike, Local};

use crate::filters::keywords::{GITHUB_PAGES_CONFERENCES, GITHUB_PAGES_TOPICS};

/// Check whether an off-domain URL is on a trusted academic hosting platform
/// with enough corroborating evidence to follow it.
///
/// | Platform | Evidence required |
/// |---|---|
/// | `*.github.io` | conference name, workshop marker, known venue, recent year or topic |
/// | `sites.google.com` | conference name or recent year |
/// | `conf.researchr.org` | none |
/// | `forum.cspaper.org` | conference name, `cvpr` or `iccv` |
pub fn is_trusted_external_platform(url: &str, conference_name: &str) -> bool {
    trusted_in_year(url, conference_name, Local::now().year())
}

pub(crate) fn trusted_in_year(url: &str, conference_name: &str, current_year: i32) -> bool {
    let url = url.to_lowercase();
    let conf = conference_name.trim().to_lowercase();
    let has_conf = !conf.is_empty() && url.contains(&conf);
    let recent_years: Vec<String> = (current_year - 1..=current_year + 1)
        .map(|y| y.to_string())
        .collect();

    if url.contains(".github.io") {
        if has_conf || url.contains("workshop") || url.contains("ws") {
            return true;
        }
        if GITHUB_PAGES_CONFERENCES
            .iter()
            .any(|c| url.contains(&format!("-{c}")))
        {
            return true;
        }
        if recent_years
            .iter()
            .any(|y| url.contains(&format!("-{y}")) || url.contains(&format!("iclr{y}")))
        {
            return true;
        }
        return GITHUB_PAGES_TOPICS.iter().any(|t| url.contains(t));
    }

    if url.contains("sites.google.com") {
        return has_conf || recent_years.iter().any(|y| url.contains(y.as_str()));
    }

    if url.contains("conf.researchr.org") {
        return true;
    }

    if url.contains("forum.cspaper.org") {
        return has_conf || url.contains("cvpr") || url.contains("iccv");
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_pages() {
        assert!(trusted_in_year("https://ijcai2026.github.io/workshop", "ijcai", 2026));
        assert!(trusted_in_year("https://xai-workshop.github.io/", "conference", 2026));
        assert!(trusted_in_year("https://example-iclr2026.github.io/", "iclr", 2026));
        assert!(trusted_in_year("https://agent-learning.github.io/", "conference", 2026));
        assert!(trusted_in_year("https://random-workshop.github.io/", "conference", 2026));
        assert!(trusted_in_year("https://lab-2027.github.io/", "conference", 2026));
        assert!(!trusted_in_year("https://random-repo.github.io/page", "conference", 2026));
        assert!(!trusted_in_year("https://random-blog.github.io/", "conference", 2026));
    }

    #[test]
    fn test_google_sites() {
        assert!(trusted_in_year("https://sites.google.com/ijcai/form", "ijcai", 2026));
        assert!(trusted_in_year("https://sites.google.com/site/name2026", "conference", 2026));
        assert!(!trusted_in_year("https://sites.google.com/site/random", "conference", 2026));
    }

    #[test]
    fn test_researchr_and_cspaper() {
        assert!(trusted_in_year("https://conf.researchr.org/track/ijcai-2026", "ijcai", 2026));
        assert!(trusted_in_year("https://forum.cspaper.org/cvpr2026/topic", "cvpr", 2026));
        assert!(trusted_in_year("https://forum.cspaper.org/iccv2026/general", "iccv", 2026));
        assert!(!trusted_in_year("https://forum.cspaper.org/general", "ijcai", 2026));
    }

    #[test]
    fn test_untrusted_and_case() {
        assert!(!trusted_in_year("https://random-site.com/page", "conference", 2026));
        assert!(trusted_in_year("https://IJCAI2026.GITHUB.IO/", "IJCAI", 2026));
        // an empty conference name is not evidence
        assert!(!trusted_in_year("https://sites.google.com/site/random", "", 2026));
    }
}
