//! Error types for density-extract.
//!
//! A page without a usable content node is not an error: the extraction
//! functions return `Ok(None)` for that. Errors are reserved for input the
//! caller has to fix.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parsed tree has no `<body>` element.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// The explicit content query is not a valid CSS selector.
    #[error("invalid content query `{query}`: {reason}")]
    InvalidQuery {
        /// The selector as supplied by the caller.
        query: String,
        /// Parser message for the selector.
        reason: String,
    },

    /// The base URL given for attachment resolution could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
