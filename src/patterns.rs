//! Compiled regex patterns and keyword tables used across the pipeline.
//!
//! Patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Noise Detection
// =============================================================================

/// Tags that never carry readable content. Removed with their subtree.
pub const NON_VISIBLE_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "iframe", "frame", "object", "embed", "svg",
    "canvas", "video", "audio", "source", "track", "picture", "img", "map", "meta", "link",
    "button", "input", "select", "textarea",
];

/// Default blacklist keywords. Matched against tag names and against the
/// `-`/`_`-delimited segments of id and class tokens.
pub const DEFAULT_NOISE_KEYWORDS: &[&str] = &[
    // layout chrome
    "nav", "navbar", "navigation", "menu", "breadcrumb", "breadcrumbs", "header", "footer",
    "aside", "sidebar", "toolbar", "pagination", "pager",
    // advertising
    "ad", "ads", "advert", "adverts", "advertisement", "banner", "sponsor", "sponsored", "promo",
    // sharing widgets
    "share", "sharing", "social", "sns",
    // boilerplate
    "comment", "comments", "related", "recommend", "recommended", "subscribe", "newsletter",
    "cookie", "popup", "modal", "copyright", "disclaimer", "widget",
    // compound tokens common in the wild, matched whole
    "adsbygoogle", "adsense", "adslot", "adbox", "sharebar", "sharethis", "addthis",
    "sharebuttons", "commentlist", "commentbox", "topnav", "sidenav", "subnav", "navlist",
];

/// Inline style declarations that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(display\s*:\s*none|visibility\s*:\s*hidden)").expect("HIDDEN_STYLE regex")
});

// =============================================================================
// Density Metrics
// =============================================================================

/// Sentence-ending and structural punctuation, ASCII and full-width forms.
pub const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '\'', '"', '(', ')', '。', '，', '、', '；', '：', '！', '？',
    '“', '”', '‘', '’', '《', '》', '（', '）', '…',
];

// =============================================================================
// Attachments
// =============================================================================

/// File extensions that mark a link as a downloadable attachment.
pub const ATTACHMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "odt", "rtf", "txt", "csv", "xls", "xlsx", "ods", "ppt", "pptx", "odp",
    "zip", "rar", "7z", "tar", "gz", "tgz", "bz2", "xz", "apk", "exe", "msi", "dmg", "iso",
    "mp3", "wav", "mp4", "avi", "mov", "wmv",
];

/// Matches a trailing file extension, before any query string or fragment.
pub static FILE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = ATTACHMENT_EXTENSIONS.join("|");
    Regex::new(&format!(r"(?i)\.({alternation})\s*(?:$|[?#])")).expect("FILE_EXTENSION regex")
});
