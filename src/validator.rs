//! # Content Validator Module
//!
//! Confirms that a candidate page plausibly carries an active recruitment
//! call, and explains why.
//!
//! ## Key Components
//!
//! - `check_page_content`: Full check of one URL, producing a `ContentMatch`
//! - `is_false_positive_url`: Structural URL pre-filter, applied before fetching
//! - `keyword_to_regex`: Word-bounded, plural- and hyphen-tolerant keyword patterns
//! - `evidence_snippet`: Page text around the first matched keyword
//!
//! ## Check Process
//!
//! 1. Reject false-positive URL patterns without fetching
//! 2. Fetch the page and extract its visible text
//! 3. Cheap root-term precheck before any pattern matching
//! 4. Require a positive recruitment signal
//! 5. Scan the content keywords and score the page

mod check;
mod false_positive;
mod patterns;
mod snippet;

pub use check::{ContentMatch, MatchStrength, check_page_content, check_pages};
pub use false_positive::{is_false_positive_url, is_false_positive_url_in};
pub use patterns::{CONTENT_KEYWORDS, has_root_term, keyword_to_regex, match_keywords};
pub use snippet::{SNIPPET_RADIUS, evidence_snippet};
