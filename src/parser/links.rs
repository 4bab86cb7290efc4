//! Hyperlink extraction

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::urls::normalize_url;

/// A hyperlink found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute, normalized target URL
    pub url: String,

    /// Anchor text with whitespace collapsed, original case preserved
    pub text: String,
}

/// Extract every `<a href>` on the page.
///
/// Relative targets resolve against the document's `<base href>` when present,
/// otherwise against `base_url`. Anchors with an empty `href` are skipped.
pub fn extract_links(html: &str, base_url: &str) -> Vec<Link> {
    let document = Html::parse_document(html);
    let Ok(anchor) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let page_base = Url::parse(base_url).ok();
    let base = document_base(&document, page_base.as_ref()).or(page_base);

    document
        .select(&anchor)
        .filter_map(|element| {
            let href = element.value().attr("href")?.trim();
            if href.is_empty() {
                return None;
            }
            let resolved = match &base {
                Some(base) => base.join(href).ok()?,
                None => Url::parse(href).ok()?,
            };
            let text = element
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            Some(Link {
                url: normalize_url(resolved.as_str()),
                text,
            })
        })
        .collect()
}

fn document_base(document: &Html, page_base: Option<&Url>) -> Option<Url> {
    let selector = Selector::parse("base[href]").ok()?;
    let href = document.select(&selector).next()?.value().attr("href")?;
    match page_base {
        Some(page) => page.join(href).ok(),
        None => Url::parse(href).ok(),
    }
}
