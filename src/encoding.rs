//! Character encoding detection and transcoding for byte input.
//!
//! Detection order: byte order mark, then a `charset` declaration in a
//! `<meta>` tag within the first kilobyte, then UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How far into the document `<meta>` declarations are looked for.
const PRESCAN_BYTES: usize = 1024;

/// Covers both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#).expect("META_CHARSET regex")
});

/// Detect the character encoding of an HTML document.
///
/// A `<meta>` declaration of UTF-16 is treated as UTF-8, since a document
/// that can be read as ASCII to find the tag cannot be UTF-16.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(PRESCAN_BYTES)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .map_or(UTF_8, Encoding::output_encoding)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD; decoding never fails. A BOM is
/// stripped.
///
/// # Examples
///
/// ```
/// use density_extract::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (decoded, _encoding_used, _had_errors) = detect_encoding(html).decode(html);
    decoded.into_owned()
}
