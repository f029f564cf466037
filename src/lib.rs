//! # density-extract
//!
//! Finds the main article body of an arbitrary web page by text and
//! punctuation density, without site-specific rules.
//!
//! Every element below `<body>` is measured once noise (scripts, navigation,
//! ads, sharing widgets...) has been stripped, and the element maximizing
//!
//! ```text
//! ln(std_density_of_text) * density_of_text * log10(p_count + 2) * ln(density_of_punctuation)
//! ```
//!
//! is selected. See [`scoring`] for the degenerate cases.
//!
//! ## Quick Start
//!
//! ```rust
//! use density_extract::{extract_main_text, Options};
//!
//! let html = r#"<html><body>
//!   <div class="article">
//!     <p>First paragraph, with punctuation.</p>
//!     <p>Second paragraph. More prose here!</p>
//!   </div>
//! </body></html>"#;
//!
//! let text = extract_main_text(html, &Options::default())?;
//! assert_eq!(
//!     text.as_deref(),
//!     Some("First paragraph, with punctuation.\nSecond paragraph. More prose here!")
//! );
//! # Ok::<(), density_extract::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Content Selection**: density scoring over body descendants
//! - **Noise Removal**: configurable keyword blacklist
//! - **Override**: explicit CSS selector bypassing the scorer
//! - **Attachments & Title**: independent helpers over the raw page

mod error;
mod extract;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Noise classification and removal.
pub mod noise;

/// Per-node density metrics.
pub mod metrics;

/// Page statistic, density score and candidate selection.
pub mod scoring;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Links to downloadable files.
pub mod attachment;

/// Page title detection.
pub mod title;

// Public API - re-exports
pub use attachment::Attachment;
pub use error::{Error, Result};
pub use extract::{paragraph_text, select_content};
pub use noise::{CleanedDocument, NoiseBlacklist};
pub use options::Options;

use extract::Output;

/// Extracts the paragraph text of the main content node.
///
/// Returns `Ok(None)` when no content node could be selected (empty body,
/// all-noise page, or every candidate excluded from scoring).
///
/// # Example
///
/// ```rust
/// use density_extract::{extract_main_text, Options};
///
/// assert_eq!(extract_main_text("<html><body></body></html>", &Options::default())?, None);
/// # Ok::<(), density_extract::Error>(())
/// ```
pub fn extract_main_text(html: &str, options: &Options) -> Result<Option<String>> {
    extract::extract_content(html, options, Output::Text)
}

/// Extracts the serialized HTML of the main content node.
///
/// # Example
///
/// ```rust
/// use density_extract::{extract_main_markup, Options};
///
/// let html = r#"<body><div id="story"><p>Text.</p></div><div id="other"><p>More, longer text.</p></div></body>"#;
/// let options = Options {
///     content_query: Some("#story".to_string()),
///     ..Options::default()
/// };
/// let markup = extract_main_markup(html, &options)?;
/// assert_eq!(markup.as_deref(), Some(r#"<div id="story"><p>Text.</p></div>"#));
/// # Ok::<(), density_extract::Error>(())
/// ```
pub fn extract_main_markup(html: &str, options: &Options) -> Result<Option<String>> {
    extract::extract_content(html, options, Output::Markup)
}

/// Like [`extract_main_text`], for raw bytes in any declared encoding.
pub fn extract_main_text_bytes(html: &[u8], options: &Options) -> Result<Option<String>> {
    extract_main_text(&encoding::transcode_to_utf8(html), options)
}

/// Like [`extract_main_markup`], for raw bytes in any declared encoding.
pub fn extract_main_markup_bytes(html: &[u8], options: &Options) -> Result<Option<String>> {
    extract_main_markup(&encoding::transcode_to_utf8(html), options)
}

/// Lists links to downloadable files, resolving them against `base_url`
/// when given.
///
/// Runs on the page as parsed; noise removal does not apply.
///
/// # Example
///
/// ```rust
/// use density_extract::extract_attachments;
///
/// let html = r#"<body><a href="/report.pdf" title="Report">Get it</a></body>"#;
/// let found = extract_attachments(html, Some("https://example.com/news/"))?;
/// assert_eq!(found[0].href, "https://example.com/report.pdf");
/// # Ok::<(), density_extract::Error>(())
/// ```
pub fn extract_attachments(html: &str, base_url: Option<&str>) -> Result<Vec<Attachment>> {
    let base = base_url.map(url::Url::parse).transpose()?;
    let document = dom::parse(html);
    Ok(attachment::find_attachments(&document, base.as_ref()))
}

/// Detects the page title from metadata, `<title>` and headings.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    title::find_title(&dom::parse(html))
}
