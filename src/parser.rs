//! # Page Parser Module
//!
//! Extraction helpers over raw HTML. None of these functions fail: malformed
//! markup yields fewer links, less text, or no date.
//!
//! ## Key Components
//!
//! - `extract_links`: Absolute, normalized hyperlinks with their anchor text
//! - `extract_visible_text`: Lowercased visible text for content scoring
//! - `extract_publication_date`: Best-effort publication date of a page

mod date;
mod links;
mod text;

pub use date::{extract_publication_date, find_publication_date};
pub use links::{Link, extract_links};
pub use text::extract_visible_text;
