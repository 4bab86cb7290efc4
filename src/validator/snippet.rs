//! Evidence snippets for human review

use crate::scoring::window_bounds;

/// Bytes of context kept either side of the match
pub const SNIPPET_RADIUS: usize = 80;

const ELLIPSIS: &str = "...";

/// Excerpt of `text` centered on byte offset `pos`.
///
/// An ellipsis marks each end where the text was cut.
pub fn evidence_snippet(text: &str, pos: usize, radius: usize) -> String {
    let (start, end) = window_bounds(text, pos, radius);
    let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(text[start..end].trim());
    if end < text.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}
