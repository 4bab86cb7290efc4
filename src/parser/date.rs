//! Publication date extraction

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use scraper::{Html, Selector};

use crate::fetcher::FetchedPage;

/// `(attribute, value)` pairs of meta tags that carry a publication date, in priority order
const DATE_META_TAGS: &[(&str, &str)] = &[
    ("property", "article:published_time"),
    ("name", "date"),
    ("name", "DC.date"),
    ("property", "og:published_time"),
];

static ISO_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:posted|published|updated):\s*(\d{4}-\d{2}-\d{2})")
        .expect("literal regex is valid")
});

static WRITTEN_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:posted|published|updated):\s*([a-z]+)\s+(\d{1,2}),?\s+(\d{4})")
        .expect("literal regex is valid")
});

/// Publication date of a fetched page, falling back to today
pub fn extract_publication_date(page: &FetchedPage) -> NaiveDate {
    find_publication_date(page.last_modified.as_deref(), &page.body)
        .unwrap_or_else(|| Utc::now().date_naive())
}

/// Look for a publication date in, by priority: the `Last-Modified` header,
/// date meta tags, then a "Posted/Published/Updated:" phrase in the page.
pub fn find_publication_date(last_modified: Option<&str>, html: &str) -> Option<NaiveDate> {
    if let Some(date) = last_modified
        .and_then(|header| DateTime::parse_from_rfc2822(header.trim()).ok())
        .map(|dt| dt.date_naive())
    {
        return Some(date);
    }

    meta_date(html).or_else(|| phrase_date(html))
}

fn meta_date(html: &str) -> Option<NaiveDate> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("meta[content]").ok()?;
    let metas: Vec<_> = document.select(&selector).collect();

    DATE_META_TAGS.iter().find_map(|(attr, wanted)| {
        metas.iter().find_map(|meta| {
            let el = meta.value();
            let matches = el
                .attr(attr)
                .is_some_and(|value| value.eq_ignore_ascii_case(wanted));
            if !matches {
                return None;
            }
            let content = el.attr("content")?;
            let day = content.split('T').next()?.trim();
            NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
        })
    })
}

fn phrase_date(html: &str) -> Option<NaiveDate> {
    if let Some(caps) = ISO_PHRASE.captures(html) {
        if let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
            return Some(date);
        }
    }

    let caps = WRITTEN_PHRASE.captures(html)?;
    let normalized = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
    NaiveDate::parse_from_str(&normalized, "%B %d %Y")
        .or_else(|_| NaiveDate::parse_from_str(&normalized, "%b %d %Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_last_modified_header() {
        assert_eq!(
            find_publication_date(Some("Thu, 15 Jan 2026 10:30:00 GMT"), ""),
            ymd(2026, 1, 15)
        );
    }

    #[test]
    fn test_header_beats_meta() {
        assert_eq!(
            find_publication_date(
                Some("Thu, 15 Jan 2026 10:30:00 GMT"),
                r#"<meta name="date" content="2026-06-20">"#
            ),
            ymd(2026, 1, 15)
        );
    }

    #[test]
    fn test_meta_tags() {
        let cases = [
            (
                r#"<meta property="article:published_time" content="2026-02-10T14:30:00Z">"#,
                ymd(2026, 2, 10),
            ),
            (r#"<meta name="date" content="2026-03-15">"#, ymd(2026, 3, 15)),
            (r#"<meta name="DC.date" content="2026-04-20">"#, ymd(2026, 4, 20)),
            (
                r#"<meta property="og:published_time" content="2026-05-25T09:00:00Z">"#,
                ymd(2026, 5, 25),
            ),
            (r#"<META NAME="DATE" CONTENT="2026-05-10">"#, ymd(2026, 5, 10)),
        ];
        for (html, expected) in cases {
            assert_eq!(find_publication_date(None, html), expected, "{html}");
        }
    }

    #[test]
    fn test_meta_beats_phrase() {
        let html = "<meta name=\"date\" content=\"2026-03-15\">\nPublished: 2026-06-20";
        assert_eq!(find_publication_date(None, html), ymd(2026, 3, 15));
    }

    #[test]
    fn test_phrases() {
        assert_eq!(find_publication_date(None, "Posted: 2026-06-10"), ymd(2026, 6, 10));
        assert_eq!(find_publication_date(None, "Published: 2026-07-05"), ymd(2026, 7, 5));
        assert_eq!(find_publication_date(None, "Updated: 2026-08-12"), ymd(2026, 8, 12));
        assert_eq!(
            find_publication_date(None, "<p>Updated: March 3, 2026</p>"),
            ymd(2026, 3, 3)
        );
        assert_eq!(
            find_publication_date(None, "<p>posted: Sep 21 2026</p>"),
            ymd(2026, 9, 21)
        );
    }

    #[test]
    fn test_fallback_to_today() {
        assert_eq!(find_publication_date(None, "<html>No date information</html>"), None);
        let page = FetchedPage::new("https://example.com", "<html>nothing</html>");
        assert_eq!(extract_publication_date(&page), Utc::now().date_naive());
    }
}
