//! Attachment detection.
//!
//! Finds links to downloadable files (documents, archives, media) by matching
//! the link target or its `title` attribute against known file extensions.
//! Hyperlinks (`a`, `area`) and embedded resource sources (`link`, `embed`,
//! `iframe`, `object`, media `source`s) are all considered. Works on the raw
//! document and is independent of content selection.

use dom_query::{Document, NodeRef, Selection};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::dom;
use crate::patterns::FILE_EXTENSION;

/// A link to a downloadable file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// `title` attribute of the link, or its text when there is no title.
    pub name: String,

    /// Link target, resolved against the base URL when one was given.
    pub href: String,

    /// Lowercase file extension that identified the attachment.
    pub extension: String,
}

/// Elements that point at another resource, and the attribute holding the
/// target.
const LINK_SOURCES: &[(&str, &str)] = &[
    ("a", "href"),
    ("area", "href"),
    ("link", "href"),
    ("embed", "src"),
    ("iframe", "src"),
    ("source", "src"),
    ("audio", "src"),
    ("video", "src"),
    ("object", "data"),
];

const LINK_SELECTOR: &str = "a[href], area[href], link[href], embed[src], iframe[src], \
                             source[src], audio[src], video[src], object[data]";

/// Collect attachment links in document order.
#[must_use]
pub fn find_attachments(document: &Document, base: Option<&Url>) -> Vec<Attachment> {
    document
        .select(LINK_SELECTOR)
        .nodes()
        .iter()
        .filter_map(|link| to_attachment(link, base))
        .collect()
}

fn to_attachment(link: &NodeRef, base: Option<&Url>) -> Option<Attachment> {
    let attribute = LINK_SOURCES
        .iter()
        .find(|(tag, _)| dom::is_tag(link, tag))
        .map(|&(_, attribute)| attribute)?;
    let href = dom::get_attribute(link, attribute)?;
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let title = dom::get_attribute(link, "title")
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    let extension = file_extension(href).or_else(|| file_extension(&title))?;

    let name = if title.is_empty() {
        let text = dom::text_content(&Selection::from(*link));
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        title
    };

    let href = base
        .and_then(|base| base.join(href).ok())
        .map_or_else(|| href.to_string(), String::from);

    Some(Attachment {
        name,
        href,
        extension,
    })
}

fn file_extension(value: &str) -> Option<String> {
    FILE_EXTENSION
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
}
