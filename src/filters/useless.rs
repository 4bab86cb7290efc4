//! URLs that are obviously not reviewer calls

use crate::filters::keywords::{
    NEVER_PATH_RESCUE_TERMS, NEVER_REVIEWER_CALL_PATHS, USELESS_EXTENSIONS, USELESS_URL_PATTERNS,
    contains_any,
};

/// Reject documents, media, social networks, logins and navigation pages.
///
/// Paths such as `/about` or `/venue` are rejected only when the URL carries
/// no recruitment term, so `/about/reviewer-nomination` survives.
pub fn is_obviously_useless(url: &str) -> bool {
    let url = url.to_lowercase();

    if USELESS_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
        return true;
    }

    if contains_any(&url, USELESS_URL_PATTERNS) {
        return true;
    }

    contains_any(&url, NEVER_REVIEWER_CALL_PATHS) && !contains_any(&url, NEVER_PATH_RESCUE_TERMS)
}
