use density_extract::metrics::annotate;
use density_extract::noise::{clean, DEFAULT_BLACKLIST};
use density_extract::scoring::{choose, Method};
use density_extract::{dom, select_content, NoiseBlacklist};

#[test]
fn cleaning_twice_equals_cleaning_once() {
    let html = r#"<html><body>
        <header class="site-header"><a href="/">Logo</a></header>
        <div class="layout">
          <div class="main"><p>Body text, <span>with</span> <strong>inline</strong> markup.</p><p> </p></div>
          <div class="comments"><p>First!</p></div>
          <div>Loose text only</div>
          <div>intro<p></p></div>
        </div>
        <!-- build 1234 -->
        <style>.x { color: red }</style>
    </body></html>"#;

    let once = clean(dom::parse(html), &DEFAULT_BLACKLIST);
    let once_html = once.html();
    let twice = clean(once.into_inner(), &DEFAULT_BLACKLIST);
    assert_eq!(once_html, twice.html());

    assert!(!once_html.contains("Logo"));
    assert!(!once_html.contains("First!"));
    assert!(!once_html.contains("<!--"));
    assert!(once_html.contains("<p>Loose text only</p>"));
    assert!(once_html.contains("<p>intro</p>"));
}

#[test]
fn candidates_exclude_body_and_noise() {
    let html = r#"<html><body><nav><p>Menu, items.</p></nav><div id="x"><p>Kept text.</p></div></body></html>"#;
    let cleaned = clean(dom::parse(html), &DEFAULT_BLACKLIST);
    let tags: Vec<String> = annotate(&cleaned).iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec!["div", "p"]);
}

#[test]
fn equal_scores_resolve_to_document_order() {
    let html = r#"<html><body>
        <div id="a"><p>Same text, here.</p><p>Again, same.</p></div>
        <div id="b"><p>Same text, here.</p><p>Again, same.</p></div>
    </body></html>"#;
    let cleaned = clean(dom::parse(html), &DEFAULT_BLACKLIST);

    let candidates = annotate(&cleaned);
    let metrics: Vec<_> = candidates.iter().map(|c| c.metrics).collect();
    let choice = choose(&metrics).unwrap();
    assert!(matches!(choice.method, Method::Scored(_)));

    let node = select_content(&cleaned).unwrap();
    assert_eq!(dom::get_attribute(&node, "id"), Some("a".to_string()));
}

#[test]
fn single_candidate_skips_the_formula() {
    let cleaned = clean(dom::parse("<html><body><p>Lonely.</p></body></html>"), &DEFAULT_BLACKLIST);
    let metrics: Vec<_> = annotate(&cleaned).iter().map(|c| c.metrics).collect();
    assert_eq!(choose(&metrics).map(|c| c.method), Some(Method::Sole));
}

#[test]
fn zero_variance_uses_max_density() {
    let cleaned = clean(
        dom::parse("<html><body><p>cell</p><p>cell</p><p>cell</p><p>cell</p></body></html>"),
        &DEFAULT_BLACKLIST,
    );
    let metrics: Vec<_> = annotate(&cleaned).iter().map(|c| c.metrics).collect();
    let choice = choose(&metrics).unwrap();
    assert_eq!(choice.index, 0);
    assert_eq!(choice.method, Method::MaxDensity);
}

#[test]
fn removed_noise_no_longer_dilutes_ancestors() {
    let html = r#"<html><body><div id="wrap"><p>Prose, plainly.</p><div class="social"><a href="/s">Share</a><a href="/t">Tweet</a></div></div></body></html>"#;

    let cleaned = clean(dom::parse(html), &DEFAULT_BLACKLIST);
    let wrap = annotate(&cleaned).into_iter().find(|c| c.tag() == "div").unwrap();
    assert_eq!(wrap.metrics.link_count, 0);
    assert_eq!(wrap.metrics.element_count, 2);

    let untouched = clean(dom::parse(html), &NoiseBlacklist::new(Vec::<String>::new()));
    let wrap = annotate(&untouched).into_iter().find(|c| c.tag() == "div").unwrap();
    assert_eq!(wrap.metrics.link_count, 2);
}
