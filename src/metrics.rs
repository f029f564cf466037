//! Metric Annotator
//!
//! Computes the density metrics of every element below `<body>` of a cleaned
//! document. Each node's metrics depend on its own subtree only.
//!
//! Normalization:
//!
//! - `density_of_text = (text - link_text) / (elements - links)`: visible,
//!   non-link characters per non-link element of the subtree (self included).
//!   Characters are non-whitespace chars.
//! - `density_of_punctuation = 1 + 100 * punctuation / text`: punctuation
//!   marks per hundred characters, offset by one so it never drops below 1.
//!
//! A node with no text, or whose elements are all links, has no defined text
//! density and is left out of the candidate set.

use dom_query::NodeRef;

use crate::dom;
use crate::noise::CleanedDocument;
use crate::patterns::PUNCTUATION;

/// Punctuation density is expressed per this many characters.
const PUNCTUATION_SCALE: f64 = 100.0;

/// Density and structure metrics of one element subtree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeMetrics {
    /// Non-whitespace characters of text in the subtree.
    pub text_length: usize,
    /// Non-whitespace characters of text inside `<a>` elements.
    pub link_text_length: usize,
    /// Elements in the subtree, the node itself included.
    pub element_count: usize,
    /// `<a>` elements in the subtree, the node itself included.
    pub link_count: usize,
    /// `<p>` descendants, the node itself excluded.
    pub paragraph_count: usize,
    /// Punctuation characters in the subtree text.
    pub punctuation_count: usize,
    /// Byte length of the serialized subtree: tags, attributes and text,
    /// before entity escaping.
    pub markup_length: usize,
    /// Non-link text per non-link element.
    pub density_of_text: f64,
    /// Punctuation marks per hundred characters, plus one.
    pub density_of_punctuation: f64,
}

/// An element eligible for scoring, with its metrics.
#[derive(Clone)]
pub struct Candidate<'a> {
    pub node: NodeRef<'a>,
    pub metrics: NodeMetrics,
}

impl Candidate<'_> {
    /// Lowercase tag name of the candidate element.
    #[must_use]
    pub fn tag(&self) -> String {
        dom::tag_name(&self.node).unwrap_or_default()
    }
}

#[derive(Default)]
struct Tally {
    text: usize,
    link_text: usize,
    elements: usize,
    links: usize,
    paragraphs: usize,
    punctuation: usize,
    markup: usize,
}

/// Measure a single element.
///
/// Returns `None` when the text density is undefined (no text, or nothing
/// but links).
#[must_use]
pub fn measure(node: &NodeRef) -> Option<NodeMetrics> {
    if !node.is_element() {
        return None;
    }
    let tally = tally(node);
    if tally.text == 0 || tally.elements <= tally.links {
        return None;
    }

    let density_of_text =
        (tally.text - tally.link_text) as f64 / (tally.elements - tally.links) as f64;
    let density_of_punctuation =
        1.0 + PUNCTUATION_SCALE * tally.punctuation as f64 / tally.text as f64;

    Some(NodeMetrics {
        text_length: tally.text,
        link_text_length: tally.link_text,
        element_count: tally.elements,
        link_count: tally.links,
        paragraph_count: tally.paragraphs,
        punctuation_count: tally.punctuation,
        markup_length: tally.markup,
        density_of_text,
        density_of_punctuation,
    })
}

fn tally(root: &NodeRef) -> Tally {
    let mut tally = Tally::default();
    // (node, inside a link, is the root)
    let mut stack = vec![(*root, false, true)];

    while let Some((node, in_link, is_root)) = stack.pop() {
        if node.is_text() {
            tally.markup += node.text().len();
            for c in node.text().chars().filter(|c| !c.is_whitespace()) {
                tally.text += 1;
                if in_link {
                    tally.link_text += 1;
                }
                if PUNCTUATION.contains(&c) {
                    tally.punctuation += 1;
                }
            }
            continue;
        }
        if !node.is_element() {
            continue;
        }

        tally.elements += 1;
        tally.markup += element_markup(&node);
        let is_link = dom::is_tag(&node, "a");
        if is_link {
            tally.links += 1;
        }
        if !is_root && dom::is_tag(&node, "p") {
            tally.paragraphs += 1;
        }
        let in_link = in_link || is_link;
        stack.extend(node.children().into_iter().map(|child| (child, in_link, false)));
    }

    tally
}

/// Bytes of `<tag attr="value">` plus `</tag>` for non-void elements.
fn element_markup(node: &NodeRef) -> usize {
    let Some(tag) = node.node_name() else {
        return 0;
    };
    let attributes: usize = node
        .attrs()
        .iter()
        .map(|attr| attr.name.local.len() + attr.value.len() + 4)
        .sum();
    let end_tag = if dom::is_void_element(node) { 0 } else { tag.len() + 3 };
    tag.len() + 2 + attributes + end_tag
}

/// Build the candidate set: every measurable element below `<body>`, in
/// document order. `<body>` itself is never a candidate.
#[must_use]
pub fn annotate(document: &CleanedDocument) -> Vec<Candidate<'_>> {
    let Some(body) = dom::body(document.document()) else {
        return Vec::new();
    };

    dom::element_descendants(&body)
        .into_iter()
        .filter_map(|node| measure(&node).map(|metrics| Candidate { node, metrics }))
        .collect()
}
