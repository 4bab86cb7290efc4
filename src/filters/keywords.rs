//! Keyword tables used by the link filters

/// Anchor-text terms that mark a link as worth content analysis
pub const PROMISING_KEYWORDS: &[&str] = &[
    "call for reviewer",
    "call for pc",
    "call for nomination",
    "reviewer",
    "pc member",
    "program committee",
    "programme committee",
    "nomination",
    "nominate",
    "committee",
    "volunteer",
    "shadow pc",
    "recruit",
    "artifact evaluation",
    "area chair",
];

/// Terms in a URL path or anchor text that make a link worth following
pub const LINK_FILTER_KEYWORDS: &[&str] = &[
    "call",
    "reviewer",
    "review",
    "pc",
    "committee",
    "nomination",
    "workshop",
    "volunteer",
    "chair",
    "shadow",
    "recruit",
];

/// Terms that make a link not worth following unless a recruitment term offsets them
pub const STOP_WORDS: &[&str] = &["venue", "travel", "sponsor", "news", "about"];

/// Recruitment terms that always override a stop word
pub const STOP_WORD_OVERRIDES: &[&str] = &["reviewer", "pc", "committee", "nomination", "call"];

/// Whole-word anchor texts of navigation links that never lead to a call
pub const SKIP_KEYWORDS: &[&str] = &[
    "about",
    "sponsor",
    "sponsors",
    "venue",
    "travel",
    "hotel",
    "registration",
    "register",
    "contact",
    "news",
    "home",
    "login",
    "visa",
    "accommodation",
];

/// File extensions that are never HTML pages worth reading
pub const USELESS_EXTENSIONS: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".svg", ".doc", ".docx", ".ppt", ".pptx", ".xls",
    ".xlsx", ".zip", ".tar", ".gz", ".mp4", ".mp3", ".ics", ".bib", ".css", ".js",
];

/// URL substrings of pages that are never calls
pub const USELESS_URL_PATTERNS: &[&str] = &[
    "twitter.com",
    "://x.com",
    "facebook.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
    "/login",
    "/signin",
    "/register",
    "/registration",
    "/sponsor",
    "mailto:",
    "javascript:",
];

/// Paths that are never reviewer calls unless a recruitment term co-occurs
pub const NEVER_REVIEWER_CALL_PATHS: &[&str] = &[
    "/about",
    "/venue",
    "/travel",
    "/visa",
    "/accommodation",
    "/hotel",
    "/contact",
    "/news",
    "/schedule",
    "/keynote",
    "/awards",
    "/proceedings",
    "/accepted-papers",
    "/gallery",
    "/photos",
];

/// Terms that rescue a URL matching [`NEVER_REVIEWER_CALL_PATHS`]
pub const NEVER_PATH_RESCUE_TERMS: &[&str] = &[
    "call",
    "reviewer",
    "review",
    "pc",
    "committee",
    "nomination",
    "recruitment",
    "member",
    "chair",
];

/// Conference short names recognized in GitHub Pages project names
pub const GITHUB_PAGES_CONFERENCES: &[&str] = &[
    "iclr", "icml", "neurips", "cvpr", "iccv", "aaai", "acl", "emnlp", "naacl", "eacl",
];

/// Topical fragments that mark a GitHub Pages site as a likely workshop
pub const GITHUB_PAGES_TOPICS: &[&str] =
    &["-ai", "science", "agent", "learning", "foundation", "model"];

/// Lowercase `haystack` contains any of `needles`
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
