//! Extraction pipeline and output adapters.
//!
//! Parse → (content query override) → noise removal → metrics → selection →
//! text or markup output.

use dom_query::{Document, Matcher, NodeRef, Selection};
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::metrics::{self, NodeMetrics};
use crate::noise::{self, CleanedDocument};
use crate::options::Options;
use crate::scoring;

/// Output adapter applied to the selected node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    /// Paragraph text joined by newlines.
    Text,
    /// Serialized outer HTML.
    Markup,
}

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options, output: Output) -> Result<Option<String>> {
    let document = dom::parse(html);

    if let Some(query) = options.content_query.as_deref() {
        if let Some(node) = first_match(&document, query)? {
            debug!(query, "content query matched, scoring skipped");
            return Ok(Some(render(&node, output)));
        }
        debug!(query, "content query matched nothing, falling back to scoring");
    }

    if dom::body(&document).is_none() {
        return Err(Error::Parse("document has no <body> element".to_string()));
    }

    let cleaned = noise::clean(document, options.blacklist());
    Ok(select_content(&cleaned).map(|node| render(&node, output)))
}

/// First element matching a CSS selector in the unprocessed document.
fn first_match<'a>(document: &'a Document, query: &str) -> Result<Option<NodeRef<'a>>> {
    let matcher = Matcher::new(query).map_err(|err| Error::InvalidQuery {
        query: query.to_string(),
        reason: format!("{err:?}"),
    })?;
    Ok(document.select_matcher(&matcher).nodes().first().copied())
}

/// Score the candidates of a cleaned document and return the winner.
///
/// `None` when the body has no measurable element or every candidate was
/// excluded from scoring.
#[must_use]
pub fn select_content(document: &CleanedDocument) -> Option<NodeRef<'_>> {
    let candidates = metrics::annotate(document);
    let measured: Vec<NodeMetrics> = candidates.iter().map(|c| c.metrics).collect();

    let choice = scoring::choose(&measured)?;
    let winner = candidates.get(choice.index)?;
    debug!(
        tag = %winner.tag(),
        method = ?choice.method,
        markup_length = winner.metrics.markup_length,
        "selected content node"
    );
    Some(winner.node)
}

fn render(node: &NodeRef, output: Output) -> String {
    match output {
        Output::Text => paragraph_text(node),
        Output::Markup => dom::outer_html(&Selection::from(*node)).to_string(),
    }
}

/// Text nested under `<p>` elements of the subtree rooted at `node`.
///
/// Every text node inside a paragraph is one fragment; fragments are trimmed,
/// blank ones dropped, and the rest joined with `\n`. The root counts when it
/// is itself a paragraph.
#[must_use]
pub fn paragraph_text(node: &NodeRef) -> String {
    let mut fragments: Vec<String> = Vec::new();
    // (node, inside a paragraph)
    let mut stack = vec![(*node, false)];

    while let Some((current, in_paragraph)) = stack.pop() {
        if current.is_text() {
            if in_paragraph {
                let text = current.text();
                let text = text.trim();
                if !text.is_empty() {
                    fragments.push(text.to_string());
                }
            }
            continue;
        }
        let in_paragraph = in_paragraph || dom::is_tag(&current, "p");
        stack.extend(
            current
                .children()
                .into_iter()
                .rev()
                .map(|child| (child, in_paragraph)),
        );
    }

    fragments.join("\n")
}
