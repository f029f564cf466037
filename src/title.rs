//! Title extraction.
//!
//! Page metadata wins when present. Otherwise the `<title>` text is matched
//! against the `h1`-`h3` headings: site names and separators usually pad the
//! `<title>`, so the heading sharing the longest common substring with it is
//! the cleaner title.

use dom_query::Document;

use crate::dom;

/// Metadata carrying the article title, in order of preference.
const META_TITLE_SELECTORS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
    r#"meta[property="twitter:title"]"#,
    r#"meta[name="title"]"#,
    r#"meta[itemprop="headline"]"#,
];

/// Find the page title.
#[must_use]
pub fn find_title(document: &Document) -> Option<String> {
    if let Some(title) = meta_title(document) {
        return Some(title);
    }

    let title_tag = dom::first_text(document, "title").map(|t| normalize_whitespace(&t));
    let headings: Vec<String> = document
        .select("h1, h2, h3")
        .iter()
        .map(|h| normalize_whitespace(&h.text()))
        .filter(|h| !h.is_empty())
        .collect();

    if let Some(title) = &title_tag {
        if let Some(heading) = best_heading(title, &headings) {
            return Some(heading);
        }
    }
    title_tag.or_else(|| headings.into_iter().next())
}

fn meta_title(document: &Document) -> Option<String> {
    META_TITLE_SELECTORS.iter().find_map(|selector| {
        let content = document.select(selector).attr("content")?;
        let content = normalize_whitespace(&content);
        (!content.is_empty()).then_some(content)
    })
}

/// Heading with the longest common substring with `title`, accepted when
/// that substring covers at least half of the heading.
fn best_heading(title: &str, headings: &[String]) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;
    for heading in headings {
        let shared = longest_common_substring(title, heading);
        if shared > best.map_or(0, |(_, len)| len) {
            best = Some((heading, shared));
        }
    }

    let (heading, shared) = best?;
    (shared * 2 >= heading.chars().count()).then(|| heading.clone())
}

/// Length in chars of the longest common substring, case-insensitive.
#[must_use]
pub fn longest_common_substring(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    let mut best = 0;
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for ca in &a {
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb { previous[j] + 1 } else { 0 };
            best = best.max(current[j + 1]);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    best
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
