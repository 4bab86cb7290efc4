//! URL normalization and domain helpers
//!
//! Every URL that enters a visited set, a known-URL set, or a candidate record
//! goes through [`normalize_url`] first, so two spellings of the same page
//! compare equal.

use url::Url;

/// Query parameters that only carry tracking information
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "gclid",
    "gclsrc",
    "fbclid",
    "msclkid",
    "dclid",
    "mc_cid",
    "mc_eid",
    "_ga",
    "_gl",
];

/// Path suffixes that resolve to the directory index
const INDEX_SUFFIXES: &[&str] = &["/index.html", "/index.php"];

/// Normalize a URL for comparison.
///
/// The result is lowercase, has no fragment, no trailing slash, no `www.`
/// host prefix, no tracking query parameters, and no `index.html` /
/// `index.php` suffix. Normalizing an already normalized URL returns it
/// unchanged.
///
/// Strings that do not parse as absolute URLs get the same textual treatment
/// (lowercase, fragment and trailing slash stripped) so they still dedup.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let Ok(mut parsed) = Url::parse(trimmed) else {
        return normalize_text(trimmed);
    };

    parsed.set_fragment(None);

    if let Some(host) = parsed.host_str() {
        let host = host.to_lowercase();
        if let Some(stripped) = host.strip_prefix("www.") {
            let stripped = stripped.to_string();
            // set_host only fails for cannot-be-a-base URLs, which have no host
            let _ = parsed.set_host(Some(&stripped));
        }
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }

    let mut out = parsed.as_str().to_lowercase();
    strip_index_and_slash(&mut out);
    out
}

/// Normalization fallback for strings the URL parser rejects
fn normalize_text(raw: &str) -> String {
    let without_fragment = raw.split('#').next().unwrap_or_default();
    let mut out = without_fragment.to_lowercase();
    strip_index_and_slash(&mut out);
    out
}

fn strip_index_and_slash(out: &mut String) {
    loop {
        let before = out.len();
        while out.ends_with('/') {
            out.pop();
        }
        for suffix in INDEX_SUFFIXES {
            if out.ends_with(suffix) {
                out.truncate(out.len() - suffix.len());
            }
        }
        if out.len() == before {
            break;
        }
    }
}

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_lowercase();
    TRACKING_PARAMS.contains(&key.as_str())
}

/// Lowercased host of a URL, if it has one
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
}

/// Check whether a URL belongs to `domain` or one of its subdomains.
///
/// `2026.aaai.org` matches `aaai.org`; `notaaai.org` does not.
pub fn is_same_domain(url: &str, domain: &str) -> bool {
    let Some(host) = host_of(url) else {
        return false;
    };
    let domain = domain.trim().to_lowercase();
    if domain.is_empty() {
        return false;
    }
    host == domain || host.ends_with(&format!(".{domain}"))
}

/// Lowercased path component of a URL, or the whole string when unparsable
pub fn path_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_lowercase(),
        Err(_) => url.to_lowercase(),
    }
}

/// Number of non-empty path segments
pub fn path_depth(url: &str) -> usize {
    path_of(url).split('/').filter(|s| !s.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercase() {
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM/PATH"),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_normalize_trailing_slash_and_fragment() {
        assert_eq!(
            normalize_url("https://example.com/path/"),
            "https://example.com/path"
        );
        assert_eq!(
            normalize_url("https://example.com/path#section"),
            "https://example.com/path"
        );
        assert_eq!(normalize_url("https://example.com/"), "https://example.com");
    }

    #[test]
    fn test_normalize_www() {
        assert_eq!(
            normalize_url("https://www.example.com/path"),
            "https://example.com/path"
        );
        // only the exact `www.` label is stripped
        assert_eq!(
            normalize_url("https://www2.example.com/path"),
            "https://www2.example.com/path"
        );
    }

    #[test]
    fn test_normalize_tracking_params() {
        assert_eq!(
            normalize_url("https://example.com/cfr?utm_source=x&utm_medium=y"),
            "https://example.com/cfr"
        );
        let kept = normalize_url("https://example.com/page?id=123&fbclid=abc&sort=name");
        assert_eq!(kept, "https://example.com/page?id=123&sort=name");
    }

    #[test]
    fn test_normalize_index_suffix() {
        assert_eq!(
            normalize_url("https://example.com/calls/index.html"),
            "https://example.com/calls"
        );
        assert_eq!(
            normalize_url("https://example.com/index.php"),
            "https://example.com"
        );
    }

    #[test]
    fn test_normalize_confluent_variants() {
        let variants = [
            "https://conf.org/cfr",
            "HTTPS://CONF.ORG/CFR",
            "https://conf.org/cfr/",
            "https://www.conf.org/cfr",
            "https://conf.org/cfr#top",
            "https://conf.org/cfr?utm_campaign=spring",
            "https://conf.org/cfr/index.html",
            "https://WWW.Conf.org/cfr/index.php#x",
        ];
        for variant in variants {
            assert_eq!(normalize_url(variant), "https://conf.org/cfr", "{variant}");
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "https://WWW.Example.com/A/b/index.html?utm_source=1#f",
            "https://example.com/page?id=1",
            "not a url/",
        ];
        for sample in samples {
            let once = normalize_url(sample);
            assert_eq!(normalize_url(&once), once);
        }
    }

    #[test]
    fn test_is_same_domain() {
        assert!(is_same_domain("https://example.com/path", "example.com"));
        assert!(is_same_domain("https://sub.example.com/path", "example.com"));
        assert!(is_same_domain("https://a.b.example.com/path", "example.com"));
        assert!(is_same_domain("https://EXAMPLE.COM/path", "example.com"));
        assert!(is_same_domain("https://www.example.com/path", "example.com"));
        assert!(!is_same_domain("https://other.com/path", "example.com"));
        assert!(!is_same_domain("https://notexample.com/path", "example.com"));
        assert!(!is_same_domain("https://example-other.com/path", "example.com"));
    }

    #[test]
    fn test_path_depth() {
        assert_eq!(path_depth("https://example.com/"), 0);
        assert_eq!(path_depth("https://example.com/a/b/"), 2);
    }
}
