//! Lexical content signals
//!
//! Signal lists are matched as plain substrings of lowercased page text.

use crate::scoring::ScoringConfig;

/// Language of calls that are not reviewer calls
pub const NEGATIVE_SIGNALS: &[&str] = &[
    "call for workshop proposals",
    "workshop proposal",
    "call for papers",
    "demonstration proposal",
    "demo proposal",
    "tutorial proposal",
    "call for participation",
];

/// Explicit reviewer language that recovers a page carrying a negative signal
pub const RECOVERY_TERMS: &[&str] = &[
    "reviewer nomination",
    "call for reviewer",
    "self-nomination",
    "nominate yourself",
    "become a reviewer",
    "reviewer recruitment",
];

/// Phrases that on their own indicate active reviewer recruitment
pub const HIGH_CONFIDENCE_SIGNALS: &[&str] = &[
    "self-nomination",
    "nominate yourself",
    "call for reviewer",
    "recruiting reviewer",
    "pc recruitment",
    "become a reviewer",
    "reviewer nomination",
    "nomination form",
];

/// Phrases that count only with a context term nearby
pub const MEDIUM_CONFIDENCE_SIGNALS: &[(&str, &[&str])] = &[
    ("looking for", &["reviewer", "pc member", "committee"]),
    ("application form", &["review", "committee", "reviewer", "pc"]),
];

/// Result of scoring a page's content signals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalScore {
    /// Sum of all signal contributions
    pub score: f64,

    /// One entry per contribution, e.g. `high:self-nomination`
    pub evidence: Vec<String>,
}

/// Score the content signals of page text.
///
/// Each negative signal costs `content_negative`, or earns
/// `content_recovery` instead when any recovery term is present. Each
/// high-confidence signal earns `content_high`; each medium signal earns
/// `content_medium` when a context term lies within `context_window` of its
/// first occurrence. Enough high-confidence hits add `content_multi_strong`.
pub fn score_content_signals(text: &str, config: &ScoringConfig) -> SignalScore {
    let text = text.to_lowercase();
    let mut result = SignalScore::default();
    let recovered = RECOVERY_TERMS.iter().any(|term| text.contains(term));

    for signal in NEGATIVE_SIGNALS.iter().filter(|s| text.contains(*s)) {
        if recovered {
            result.score += config.content_recovery;
            result.evidence.push(format!("negative_recovered:{signal}"));
        } else {
            result.score += config.content_negative;
            result.evidence.push(format!("negative:{signal}"));
        }
    }

    let mut high_hits = 0;
    for signal in HIGH_CONFIDENCE_SIGNALS.iter().filter(|s| text.contains(*s)) {
        result.score += config.content_high;
        result.evidence.push(format!("high:{signal}"));
        high_hits += 1;
    }

    for (signal, _) in MEDIUM_CONFIDENCE_SIGNALS
        .iter()
        .filter(|(signal, context)| medium_in_context(&text, signal, context, config.context_window))
    {
        result.score += config.content_medium;
        result.evidence.push(format!("medium:{signal}"));
    }

    if high_hits >= config.multi_strong_min_hits {
        result.score += config.content_multi_strong;
        result.evidence.push("bonus:multi_strong".to_string());
    }

    result
}

/// Whether page text plausibly carries a recruitment call.
///
/// Same semantics as [`score_content_signals`]: an unrecovered negative
/// signal rejects the page outright, otherwise any high-confidence signal or
/// any medium signal with nearby context accepts it.
pub fn has_positive_signals(text: &str, context_window: usize) -> bool {
    let text = text.to_lowercase();

    let negative = NEGATIVE_SIGNALS.iter().any(|s| text.contains(s));
    if negative && !RECOVERY_TERMS.iter().any(|t| text.contains(t)) {
        return false;
    }

    if HIGH_CONFIDENCE_SIGNALS.iter().any(|s| text.contains(s)) {
        return true;
    }

    MEDIUM_CONFIDENCE_SIGNALS
        .iter()
        .any(|(signal, context)| medium_in_context(&text, signal, context, context_window))
}

fn medium_in_context(text: &str, signal: &str, context: &[&str], window: usize) -> bool {
    let Some(pos) = text.find(signal) else {
        return false;
    };
    let around = window_around(text, pos, window);
    context.iter().any(|term| around.contains(term))
}

/// Slice of `text` reaching `radius` bytes either side of `pos`, widened to
/// the nearest char boundaries
pub(crate) fn window_around(text: &str, pos: usize, radius: usize) -> &str {
    let (start, end) = window_bounds(text, pos, radius);
    &text[start..end]
}

/// Byte range used by [`window_around`]
pub(crate) fn window_bounds(text: &str, pos: usize, radius: usize) -> (usize, usize) {
    let mut start = pos.saturating_sub(radius).min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = pos.saturating_add(radius).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    (start, end)
}
