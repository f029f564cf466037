//! Configuration options for content extraction.
//!
//! The `Options` struct is passed to every extraction call. There is no
//! global mutable configuration: the default noise blacklist is an immutable
//! process-wide value that a call can replace through `noise_blacklist`.

use crate::noise::{NoiseBlacklist, DEFAULT_BLACKLIST};

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use density_extract::{NoiseBlacklist, Options};
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     content_query: Some("article .story-body".to_string()),
///     noise_blacklist: Some(NoiseBlacklist::default().with_keywords(["teaser"])),
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Explicit CSS selector for the content node.
    ///
    /// When it matches at least one element of the unprocessed document, the
    /// first match is returned directly and density scoring is skipped. When
    /// it matches nothing, extraction falls back to scoring.
    ///
    /// Default: `None`
    pub content_query: Option<String>,

    /// Keyword blacklist used by the noise preprocessor.
    ///
    /// Default: `None` (the built-in list)
    pub noise_blacklist: Option<NoiseBlacklist>,
}

impl Options {
    /// The blacklist in effect for this call.
    #[must_use]
    pub fn blacklist(&self) -> &NoiseBlacklist {
        self.noise_blacklist.as_ref().unwrap_or(&*DEFAULT_BLACKLIST)
    }
}
