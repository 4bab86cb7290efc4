//! Candidate records and their role and label guesses

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::{Decision, ScoredUrl, ScoringConfig};
use crate::validator::{ContentMatch, MatchStrength};

/// Reviewing role a call recruits for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Reviewer")]
    Reviewer,
    #[serde(rename = "External Reviewer")]
    ExternalReviewer,
    #[serde(rename = "Emergency Reviewer")]
    EmergencyReviewer,
    #[serde(rename = "AEC")]
    Aec,
    #[serde(rename = "SAC")]
    Sac,
    #[serde(rename = "SPC")]
    Spc,
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "PC")]
    Pc,
}

/// First matching substring wins
const ROLE_TABLE: &[(&str, Role)] = &[
    ("external reviewer", Role::ExternalReviewer),
    ("emergency reviewer", Role::EmergencyReviewer),
    ("artifact evaluation", Role::Aec),
    ("aec", Role::Aec),
    ("senior area chair", Role::Sac),
    ("senior program committee", Role::Spc),
    ("spc", Role::Spc),
    ("area chair", Role::Ac),
    ("program committee", Role::Pc),
    ("pc", Role::Pc),
];

impl Role {
    /// Guess the role from matched keywords
    pub fn guess(keywords: &[String]) -> Self {
        let keywords: Vec<String> = keywords.iter().map(|kw| kw.to_lowercase()).collect();
        ROLE_TABLE
            .iter()
            .find(|(needle, _)| keywords.iter().any(|kw| kw.contains(needle)))
            .map(|(_, role)| *role)
            .unwrap_or(Role::Reviewer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Reviewer => "Reviewer",
            Role::ExternalReviewer => "External Reviewer",
            Role::EmergencyReviewer => "Emergency Reviewer",
            Role::Aec => "AEC",
            Role::Sac => "SAC",
            Role::Spc => "SPC",
            Role::Ac => "AC",
            Role::Pc => "PC",
        })
    }
}

/// Kind of venue track a call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "Main")]
    Main,
    #[serde(rename = "Workshop")]
    Workshop,
    #[serde(rename = "Industry")]
    Industry,
    #[serde(rename = "Shadow/Junior")]
    ShadowJunior,
}

const WORKSHOP_URL_INDICATORS: &[&str] = &[
    "workshop",
    "-ws-",
    "github.io",
    "sites.google.com",
    "/workshops/",
    "/accepted-workshops/",
];

impl Label {
    /// Guess the label from the page URL and matched keywords
    pub fn guess(url: &str, keywords: &[String]) -> Self {
        let url = url.to_lowercase();
        let keywords = keywords.join(" ").to_lowercase();
        let mentions = |terms: &[&str]| {
            terms
                .iter()
                .any(|t| url.contains(t) || keywords.contains(t))
        };

        if WORKSHOP_URL_INDICATORS.iter().any(|i| url.contains(i)) || keywords.contains("workshop") {
            Label::Workshop
        } else if mentions(&["industry", "industrial"]) {
            Label::Industry
        } else if mentions(&["shadow", "junior"]) {
            Label::ShadowJunior
        } else {
            Label::Main
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Label::Main => "Main",
            Label::Workshop => "Workshop",
            Label::Industry => "Industry",
            Label::ShadowJunior => "Shadow/Junior",
        })
    }
}

/// A page proposed as a recruitment call for one conference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Conference short name
    pub conference: String,

    /// Conference year the call is for
    pub year: i32,

    /// Exploration node, carrying the content score
    #[serde(flatten)]
    pub scored: ScoredUrl,

    /// URL the page was served from after redirects
    pub final_url: String,

    pub role: Role,
    pub label: Label,
    pub publication_date: NaiveDate,
    pub matched_keywords: Vec<String>,
    pub evidence_snippet: String,
    pub strength: MatchStrength,

    /// Weighted score at the time the candidate was built
    pub final_score: f64,

    pub decision: Decision,
}

impl Candidate {
    /// Combine an exploration node with the content check of its page
    pub fn new(
        conference: &str,
        year: i32,
        node: &ScoredUrl,
        found: ContentMatch,
        scoring: &ScoringConfig,
    ) -> Self {
        let scored = node.with_content_score(found.content_score);
        let final_score = scored.final_score(scoring);
        let decision = scored.decision(scoring);

        Self {
            conference: conference.to_string(),
            year,
            role: Role::guess(&found.matched_keywords),
            label: Label::guess(&scored.url, &found.matched_keywords),
            scored,
            final_url: found.final_url,
            publication_date: found.publication_date,
            matched_keywords: found.matched_keywords,
            evidence_snippet: found.evidence_snippet,
            strength: found.strength,
            final_score,
            decision,
        }
    }

    pub fn url(&self) -> &str {
        &self.scored.url
    }
}
