//! Keyword filters over discovered links

use tracing::debug;

use crate::filters::domain::is_trusted_external_platform;
use crate::filters::keywords::{
    LINK_FILTER_KEYWORDS, PROMISING_KEYWORDS, SKIP_KEYWORDS, STOP_WORD_OVERRIDES, STOP_WORDS,
    contains_any,
};
use crate::filters::useless::is_obviously_useless;
use crate::parser::Link;
use crate::urls::{is_same_domain, path_of};

/// Anchor text mentions reviewer recruitment
pub fn has_promising_keywords(text: &str) -> bool {
    contains_any(&text.to_lowercase(), PROMISING_KEYWORDS)
}

/// Anchor text is a plain navigation label such as "About" or "Hotel Info".
///
/// Promising keywords win over the navigation label.
pub fn should_skip_link_text(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    let is_nav = SKIP_KEYWORDS.iter().any(|kw| {
        text == *kw || text.starts_with(&format!("{kw} ")) || text.ends_with(&format!(" {kw}"))
    });
    is_nav && !has_promising_keywords(&text)
}

/// Text contains a recruitment term worth following
pub fn has_filter_keyword(text: &str) -> bool {
    contains_any(&text.to_lowercase(), LINK_FILTER_KEYWORDS)
}

/// Text contains a stop word and no offsetting recruitment term
pub fn has_stop_word(text: &str) -> bool {
    let text = text.to_lowercase();
    if contains_any(&text, STOP_WORD_OVERRIDES) {
        return false;
    }
    contains_any(&text, STOP_WORDS)
}

/// Decide whether the explorer should follow a link.
///
/// The path or the anchor text must carry a recruitment term. Only the path
/// can veto the link with a stop word.
pub fn should_explore_link(link: &Link) -> bool {
    let path = path_of(&link.url);
    if !(has_filter_keyword(&path) || has_filter_keyword(&link.text)) {
        return false;
    }
    !has_stop_word(&path)
}

/// Options for [`filter_links`]
#[derive(Debug, Clone)]
pub struct LinkFilterOptions {
    /// Conference domain; subdomains are in scope
    pub base_domain: String,

    /// Conference short name, used as evidence for external platforms
    pub conference_name: String,

    /// Drop obviously useless URLs
    pub filter_useless: bool,

    /// Drop navigation-label anchors
    pub filter_by_text: bool,

    /// Drop off-domain links that are not on a trusted platform
    pub filter_by_domain: bool,
}

impl LinkFilterOptions {
    /// All filters enabled for the given domain
    pub fn new(base_domain: impl Into<String>) -> Self {
        Self {
            base_domain: base_domain.into(),
            conference_name: String::new(),
            filter_useless: true,
            filter_by_text: true,
            filter_by_domain: true,
        }
    }

    /// Set the conference short name
    pub fn conference_name(mut self, name: impl Into<String>) -> Self {
        self.conference_name = name.into();
        self
    }
}

/// Keep links that are in scope, not obviously useless, and not navigation labels
pub fn filter_links(links: Vec<Link>, options: &LinkFilterOptions) -> Vec<Link> {
    links
        .into_iter()
        .filter(|link| {
            if options.filter_by_domain
                && !is_same_domain(&link.url, &options.base_domain)
                && !is_trusted_external_platform(&link.url, &options.conference_name)
            {
                debug!("Dropping off-domain link {}", link.url);
                return false;
            }
            if options.filter_useless && is_obviously_useless(&link.url) {
                debug!("Dropping useless link {}", link.url);
                return false;
            }
            if options.filter_by_text && !link.text.is_empty() && should_skip_link_text(&link.text)
            {
                debug!("Dropping navigation link {} ({})", link.url, link.text);
                return false;
            }
            true
        })
        .collect()
}
