//! Noise Preprocessor
//!
//! Strips the parts of a page that never belong to the main content before
//! any density metric is computed: invisible elements, hidden elements and
//! elements whose tag, id or class hits the keyword blacklist.
//!
//! Classification is an explicit function returning a [`Verdict`], and the
//! blacklist is plain data passed in by the caller. [`clean`] consumes the
//! parsed [`Document`] and hands back a [`CleanedDocument`], which is the only
//! input the metric annotator accepts.

use std::fmt;
use std::sync::LazyLock;

use dom_query::{Document, NodeRef, Selection};
use tracing::trace;

use crate::dom;
use crate::patterns::{DEFAULT_NOISE_KEYWORDS, HIDDEN_STYLE, NON_VISIBLE_TAGS};

/// Process-wide default blacklist. Immutable after first use.
pub static DEFAULT_BLACKLIST: LazyLock<NoiseBlacklist> = LazyLock::new(NoiseBlacklist::default);

/// Keywords identifying navigation, advertising, sharing widgets and
/// boilerplate.
///
/// A keyword matches an element when it equals the element's tag name, or
/// equals one of the `-`/`_`-delimited segments of an `id` or `class` token.
/// Matching is case-insensitive. `ad` therefore matches `class="ad-slot"` but
/// not `class="header"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseBlacklist {
    keywords: Vec<String>,
}

impl NoiseBlacklist {
    /// Build a blacklist from scratch, replacing the defaults.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { keywords: Vec::new() }.with_keywords(keywords)
    }

    /// Add keywords on top of the current list.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_ascii_lowercase();
            if !keyword.is_empty() && !self.keywords.contains(&keyword) {
                self.keywords.push(keyword);
            }
        }
        self
    }

    /// The normalized (lowercase, deduplicated) keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Return the keyword equal to `word` (already lowercase), if any.
    #[must_use]
    pub fn matching_keyword(&self, word: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| k.as_str() == word)
            .map(String::as_str)
    }

    /// First keyword matching a segment of any token.
    fn match_tokens(&self, tokens: &[String]) -> Option<String> {
        tokens
            .iter()
            .flat_map(|token| token.split(['-', '_']))
            .find_map(|segment| self.matching_keyword(segment))
            .map(str::to_string)
    }
}

impl Default for NoiseBlacklist {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_NOISE_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Why an element was classified as noise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoiseReason {
    /// Element that never renders readable text (`script`, `style`, media...).
    NonVisible(String),
    /// `hidden` attribute, `aria-hidden="true"` or an inline style hiding it.
    Hidden,
    /// Tag name is a blacklist keyword.
    BlacklistedTag(String),
    /// A segment of the `id` attribute is a blacklist keyword.
    BlacklistedId(String),
    /// A segment of a `class` token is a blacklist keyword.
    BlacklistedClass(String),
}

impl fmt::Display for NoiseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonVisible(tag) => write!(f, "non-visible <{tag}>"),
            Self::Hidden => f.write_str("hidden"),
            Self::BlacklistedTag(k) => write!(f, "blacklisted tag `{k}`"),
            Self::BlacklistedId(k) => write!(f, "blacklisted id keyword `{k}`"),
            Self::BlacklistedClass(k) => write!(f, "blacklisted class keyword `{k}`"),
        }
    }
}

/// Classification of a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Leave the element (and look at its children).
    Keep,
    /// Detach the element together with its subtree.
    Remove(NoiseReason),
}

/// Classify one node against the noise rules.
///
/// Nodes that are not elements are always kept.
#[must_use]
pub fn classify(node: &NodeRef, blacklist: &NoiseBlacklist) -> Verdict {
    let Some(tag) = dom::tag_name(node) else {
        return Verdict::Keep;
    };

    if NON_VISIBLE_TAGS.contains(&tag.as_str()) {
        return Verdict::Remove(NoiseReason::NonVisible(tag));
    }
    if is_hidden(node) {
        return Verdict::Remove(NoiseReason::Hidden);
    }
    if let Some(keyword) = blacklist.matching_keyword(&tag) {
        return Verdict::Remove(NoiseReason::BlacklistedTag(keyword.to_string()));
    }
    if let Some(keyword) = blacklist.match_tokens(&dom::attribute_tokens(node, "id")) {
        return Verdict::Remove(NoiseReason::BlacklistedId(keyword));
    }
    if let Some(keyword) = blacklist.match_tokens(&dom::attribute_tokens(node, "class")) {
        return Verdict::Remove(NoiseReason::BlacklistedClass(keyword));
    }
    Verdict::Keep
}

fn is_hidden(node: &NodeRef) -> bool {
    node.has_attr("hidden")
        || node
            .attr("aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
        || node.attr("style").is_some_and(|s| HIDDEN_STYLE.is_match(&s))
}

/// A document that went through [`clean`].
///
/// Owning the tree by value means no handle to the un-cleaned version can
/// outlive the cleaning step.
pub struct CleanedDocument(Document);

impl CleanedDocument {
    /// Borrow the cleaned tree.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.0
    }

    /// Give the tree back, e.g. to clean it again.
    #[must_use]
    pub fn into_inner(self) -> Document {
        self.0
    }

    /// Serialized HTML of the whole cleaned tree.
    #[must_use]
    pub fn html(&self) -> String {
        self.0.html().to_string()
    }
}

/// Remove noise from `document` and normalize paragraphs.
///
/// Steps, in order:
/// 1. drop HTML comments;
/// 2. detach every body descendant classified as noise (outermost first);
/// 3. unwrap `span` and `blockquote`, and `strong` inside paragraphs;
/// 4. drop paragraphs without text;
/// 5. rename text-only `div`s (no element children) to `p`, unless `p` is
///    itself a blacklisted tag.
///
/// Running it on an already cleaned tree changes nothing, whatever the
/// blacklist.
#[must_use]
pub fn clean(document: Document, blacklist: &NoiseBlacklist) -> CleanedDocument {
    scrub(&document, blacklist);
    CleanedDocument(document)
}

fn scrub(document: &Document, blacklist: &NoiseBlacklist) {
    dom::remove_comments(document);

    let Some(body) = dom::body(document) else {
        return;
    };

    for (node, reason) in find_noise(&body, blacklist) {
        trace!(
            tag = %dom::tag_name(&node).unwrap_or_default(),
            %reason,
            "removing noise node"
        );
        node.remove_from_parent();
    }

    let body_sel = Selection::from(body);
    body_sel.strip_elements(&["span", "blockquote"]);
    body_sel.select("p").strip_elements(&["strong"]);

    let blank_paragraphs: Vec<NodeRef> = body_sel
        .select("p")
        .nodes()
        .iter()
        .filter(|p| p.text().trim().is_empty())
        .copied()
        .collect();
    for p in blank_paragraphs {
        p.remove_from_parent();
    }

    // a renamed div would be removed as noise by the next pass
    if blacklist.matching_keyword("p").is_some() {
        return;
    }
    let text_only_divs: Vec<NodeRef> = body_sel
        .select("div")
        .nodes()
        .iter()
        .filter(|div| dom::element_children(div).is_empty() && !div.text().trim().is_empty())
        .copied()
        .collect();
    for div in text_only_divs {
        Selection::from(div).rename("p");
    }
}

/// Outermost noise elements under `body`, in document order.
fn find_noise<'a>(body: &NodeRef<'a>, blacklist: &NoiseBlacklist) -> Vec<(NodeRef<'a>, NoiseReason)> {
    let mut found = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = dom::element_children(body).into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        match classify(&node, blacklist) {
            Verdict::Remove(reason) => found.push((node, reason)),
            Verdict::Keep => stack.extend(dom::element_children(&node).into_iter().rev()),
        }
    }
    found
}
