//! Content keyword patterns

use std::sync::LazyLock;

use regex::Regex;

/// Recruitment phrases scanned for in page text, in reporting order
pub const CONTENT_KEYWORDS: &[&str] = &[
    "self-nomination",
    "call for reviewers",
    "aec application",
    "reviewer invite",
    "reviewer needed",
    "shadow reviewer",
    "review panel",
    "meta-review",
    "co-chair",
    "cochair",
    "volunteer as pc member",
    "reviewer volunteer",
    "pc volunteer",
    "volunteer as reviewer",
    "student reviewer",
    "junior reviewer",
    "shadow pc",
    "pc member",
    "spc nomination",
    "aec member",
    "nominate yourself",
    "apply as reviewer",
    "workshop reviewer",
    "pc nomination",
    "program committee",
    "area chair",
    "chair recruitment",
    "chair nomination",
    "external reviewer",
    "artifact evaluation committee",
    "reviewer application",
    "reviewer call",
];

/// Cheap substrings at least one of which every recruitment page contains
const ROOT_TERMS: &[&str] = &[
    "review",
    "nominat",
    "committee",
    "pc",
    "volunteer",
    "chair",
    "recruit",
];

/// Compiled [`CONTENT_KEYWORDS`], paired with their keyword
static KEYWORD_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CONTENT_KEYWORDS
        .iter()
        .filter_map(|kw| Regex::new(&keyword_to_regex(kw)).ok().map(|re| (*kw, re)))
        .collect()
});

/// Build a case-insensitive, word-bounded pattern for a keyword.
///
/// Words may be separated by any run of whitespace or hyphens. The last word
/// takes an optional plural `s` unless it already ends in `s`.
pub fn keyword_to_regex(keyword: &str) -> String {
    let words: Vec<String> = keyword
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .map(regex::escape)
        .collect();

    let mut pattern = words.join(r"[\s\-]+");
    if !keyword.trim_end().ends_with('s') {
        pattern.push_str("s?");
    }
    format!(r"(?i)\b{pattern}\b")
}

/// Whether the text contains any root term
pub fn has_root_term(text: &str) -> bool {
    ROOT_TERMS.iter().any(|term| text.contains(term))
}

/// Every content keyword found in `text`, in keyword order, with the byte
/// offset of its first occurrence
pub fn match_keywords(text: &str) -> Vec<(&'static str, usize)> {
    KEYWORD_PATTERNS
        .iter()
        .filter_map(|(kw, re)| re.find(text).map(|m| (*kw, m.start())))
        .collect()
}
