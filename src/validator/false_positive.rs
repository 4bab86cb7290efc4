//! Structural URL patterns of pages that look relevant but are not calls
//!
//! The rules are applied in a fixed order and several overlap.

use chrono::{Datelike, Local};

const COMMITTEE_LISTING_PATTERNS: &[&str] = &[
    "/committee",
    "/committees",
    "/organizing-committee",
    "/organization",
    "/people",
];

/// Presence of any of these keeps committee and policy pages in play
const RECRUITMENT_TERMS: &[&str] = &[
    "call",
    "nomination",
    "recruit",
    "volunteer",
    "join",
    "apply",
    "application",
    "invite",
    "reviewer",
];

const TRACK_EXCEPTIONS: &[&str] = &[
    "artifact", "reviewer", "pc", "committee", "shadow", "aec", "junior",
];

const CALL_FOR_PAPER_PATTERNS: &[&str] = &["call-for-papers", "call-for-paper", "cfp"];

const REVIEWER_CONTEXT_TERMS: &[&str] = &["reviewer", "pc", "committee", "nomination", "shadow"];

const GENERIC_HOMEPAGE_PATTERNS: &[&str] = &["/index.html", "/index.php", "/home", "/welcome"];

const POLICY_TERMS: &[&str] = &["principles", "policy", "guidelines"];

const FALSE_POSITIVE_PATHS: &[&str] = &[
    "/accepted-papers",
    "/keynote",
    "/organizers",
    "/important-dates",
    "/dates",
    "/faq",
    "/awards",
    "/proceedings",
    "/schedule",
    "/news/",
    "/blog/",
];

/// First year checked for stale year segments
const YEAR_FILTER_START: i32 = 2015;

fn contains_any(url: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| url.contains(n))
}

/// Whether `url` matches a false-positive pattern, relative to the current year
pub fn is_false_positive_url(url: &str) -> bool {
    is_false_positive_url_in(url, Local::now().year())
}

/// Whether `url` matches a false-positive pattern when the current year is
/// `current_year`
pub fn is_false_positive_url_in(url: &str, current_year: i32) -> bool {
    let url = url.to_lowercase();
    let has_recruitment_terms = contains_any(&url, RECRUITMENT_TERMS);

    if !has_recruitment_terms && contains_any(&url, COMMITTEE_LISTING_PATTERNS) {
        return true;
    }

    if url.contains("/track/") && !url.contains("/call") && !contains_any(&url, TRACK_EXCEPTIONS) {
        return true;
    }

    if url.contains("/details/") && url.split('/').count() >= 6 {
        return true;
    }

    if !contains_any(&url, REVIEWER_CONTEXT_TERMS) && contains_any(&url, CALL_FOR_PAPER_PATTERNS) {
        return true;
    }

    if GENERIC_HOMEPAGE_PATTERNS
        .iter()
        .any(|p| url.ends_with(p) || url.ends_with(&format!("{p}/")))
    {
        return true;
    }

    if [".org", ".org/", ".com", ".com/"].iter().any(|s| url.ends_with(s)) {
        return true;
    }

    if (current_year - 2..=current_year + 1).any(|y| url.ends_with(&format!("/{y}"))) {
        return true;
    }

    if url.ends_with("/pc.html") || url.ends_with("/committee.html") {
        return true;
    }

    if contains_any(&url, POLICY_TERMS) && !has_recruitment_terms {
        return true;
    }

    if url.contains("/registration") || url.contains("/attending/") {
        return true;
    }

    if url.contains("/program/") && !url.contains("program-committee") {
        return true;
    }

    if contains_any(&url, FALSE_POSITIVE_PATHS) && !url.contains("reviewer") && !url.contains("pc") {
        return true;
    }

    (YEAR_FILTER_START..current_year - 1).any(|y| {
        url.contains(&format!("/{y}/")) || url.contains(&format!("-{y}/")) || url.contains(&format!("-{y}-"))
    })
}
