//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. Everything downstream works on
//! `NodeRef` handles, so the helpers here take nodes rather than selections
//! unless a selection is the natural unit (serialization, querying).

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Parsing is lenient: html5ever repairs unclosed and misnested tags and
/// always synthesizes `<html>`, `<head>` and `<body>`.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get the `<body>` element of a document, if the tree has one.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

// === Tag/Node Information ===

/// Get tag name (lowercase). `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether an element has the given tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Check whether an element never has an end tag (`br`, `hr`, `img`...).
#[must_use]
pub fn is_void_element(node: &NodeRef) -> bool {
    const VOID_ELEMENTS: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input",
        "link", "meta", "param", "source", "track", "wbr",
    ];

    tag_name(node).is_some_and(|t| VOID_ELEMENTS.contains(&t.as_str()))
}

/// Lowercased whitespace-separated tokens of an attribute (`class`, `id`).
#[must_use]
pub fn attribute_tokens(node: &NodeRef, name: &str) -> Vec<String> {
    node.attr(name)
        .map(|value| {
            value
                .split_whitespace()
                .map(str::to_ascii_lowercase)
                .collect()
        })
        .unwrap_or_default()
}

/// Direct element children of a node.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// All element descendants of `root` in document order, `root` excluded.
///
/// Uses an explicit stack so arbitrarily deep trees cannot overflow.
#[must_use]
pub fn element_descendants<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = element_children(root).into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        stack.extend(element_children(&node).into_iter().rev());
        out.push(node);
    }
    out
}

// === Text Content ===

/// Get all text content of a selection and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get the outer HTML of a selection.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Trimmed text of the first node matching `selector`, if non-blank.
#[must_use]
pub fn first_text(doc: &Document, selector: &str) -> Option<String> {
    let text = doc.select(selector).first().text();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

// === Tree Manipulation ===

/// Remove every HTML comment node from the document.
pub fn remove_comments(doc: &Document) {
    let comments: Vec<NodeRef> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_comment)
        .collect();
    for comment in comments {
        comment.remove_from_parent();
    }
}
