use density_extract::{
    dom, extract_main_markup, extract_main_markup_bytes, extract_main_text,
    extract_main_text_bytes, NoiseBlacklist, Options,
};

const STORY_PAGE: &str = r#"
<html>
  <head><title>Council passes budget</title></head>
  <body>
    <div id="links">
      <a href="/">Home</a>
      <a href="/world">World news</a>
      <a href="/sport">Sport</a>
      <a href="/weather">Weather</a>
    </div>
    <div id="story">
      <p>The city council met on Tuesday evening to debate the budget, which had been delayed twice.</p>
      <p>After four hours of discussion, members approved it by a narrow margin of seven to six.</p>
      <p>Supporters said the plan protects libraries, parks and bus routes; critics disagreed.</p>
      <p>"We cannot keep postponing repairs," the mayor told reporters outside the chamber.</p>
      <p>The new spending rules take effect in January, pending a final review by auditors.</p>
    </div>
  </body>
</html>
"#;

#[test]
fn prose_block_beats_link_list() {
    let text = extract_main_text(STORY_PAGE, &Options::default())
        .expect("extraction should succeed")
        .expect("a content node should be selected");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("The city council met on Tuesday"));
    assert!(lines[4].ends_with("final review by auditors."));
    assert!(!text.contains("World news"));
}

#[test]
fn markup_output_is_the_selected_subtree() {
    let markup = extract_main_markup(STORY_PAGE, &Options::default())
        .expect("extraction should succeed")
        .expect("a content node should be selected");

    assert!(markup.starts_with(r#"<div id="story">"#));
    assert!(markup.ends_with("</div>"));
    assert_eq!(markup.matches("<p>").count(), 5);
    assert!(!markup.contains("World news"));
}

#[test]
fn empty_body_yields_none() {
    let html = "<html><body></body></html>";
    assert_eq!(extract_main_text(html, &Options::default()).unwrap(), None);
    assert_eq!(extract_main_markup(html, &Options::default()).unwrap(), None);
}

#[test]
fn all_noise_page_yields_none() {
    let html = r#"<html><body>
        <nav><a href="/">Home</a></nav>
        <script>var x = "lots of script text, with punctuation.";</script>
        <div class="ad-banner"><p>Buy now, save big!</p></div>
        <footer><p>Copyright, all rights reserved.</p></footer>
    </body></html>"#;
    assert_eq!(extract_main_text(html, &Options::default()).unwrap(), None);
    assert_eq!(extract_main_markup(html, &Options::default()).unwrap(), None);
}

#[test]
fn single_candidate_is_selected() {
    // the text-only div becomes a paragraph and is the only candidate
    let html = "<html><body><div>Just one line of text</div></body></html>";
    assert_eq!(
        extract_main_text(html, &Options::default()).unwrap().as_deref(),
        Some("Just one line of text")
    );
    assert_eq!(
        extract_main_markup(html, &Options::default()).unwrap().as_deref(),
        Some("<p>Just one line of text</p>")
    );
}

#[test]
fn uniform_density_falls_back_to_first_densest_node() {
    let html = "<html><body><p>alpha</p><p>bravo</p><p>gamma</p></body></html>";
    assert_eq!(
        extract_main_text(html, &Options::default()).unwrap().as_deref(),
        Some("alpha")
    );
    assert_eq!(
        extract_main_markup(html, &Options::default()).unwrap().as_deref(),
        Some("<p>alpha</p>")
    );
}

#[test]
fn content_query_bypasses_scoring_and_noise_removal() {
    let html = r#"<html><body>
        <div id="story"><p>Long article text, with many sentences. And more; and more.</p><p>Another one.</p></div>
        <div id="promo"><p>Short.</p><div class="share-tools">Share</div><script>track();</script></div>
    </body></html>"#;
    let options = Options {
        content_query: Some("#promo".to_string()),
        ..Options::default()
    };

    let markup = extract_main_markup(html, &options).unwrap();
    let expected = dom::parse(html).select("#promo").html().to_string();
    assert_eq!(markup, Some(expected));
    assert!(markup.unwrap().contains("track();"));

    assert_eq!(extract_main_text(html, &options).unwrap().as_deref(), Some("Short."));
}

#[test]
fn content_query_takes_first_match() {
    let html = r#"<html><body><section><p>one</p></section><section><p>two</p></section></body></html>"#;
    let options = Options {
        content_query: Some("body > section".to_string()),
        ..Options::default()
    };
    assert_eq!(
        extract_main_markup(html, &options).unwrap().as_deref(),
        Some("<section><p>one</p></section>")
    );
}

#[test]
fn unmatched_content_query_falls_back_to_scoring() {
    let options = Options {
        content_query: Some("article.missing".to_string()),
        ..Options::default()
    };
    assert_eq!(
        extract_main_markup(STORY_PAGE, &options).unwrap(),
        extract_main_markup(STORY_PAGE, &Options::default()).unwrap()
    );
}

#[test]
fn extraction_is_deterministic() {
    let first = extract_main_markup(STORY_PAGE, &Options::default()).unwrap();
    for _ in 0..5 {
        assert_eq!(extract_main_markup(STORY_PAGE, &Options::default()).unwrap(), first);
    }
}

#[test]
fn custom_blacklist_changes_selection() {
    let html = r#"<html><body>
        <div class="teaser">
          <p>This teaser block has plenty of prose, commas, and full stops.</p>
          <p>It goes on for a while, so it wins by default. Really, it does.</p>
        </div>
        <div id="body">
          <p>The real article is shorter, but it is the one we want.</p>
          <p>It has two paragraphs as well; both are short.</p>
        </div>
    </body></html>"#;

    let default_text = extract_main_text(html, &Options::default()).unwrap().unwrap();
    assert!(default_text.contains("teaser block"));

    let options = Options {
        noise_blacklist: Some(NoiseBlacklist::default().with_keywords(["teaser"])),
        ..Options::default()
    };
    let text = extract_main_text(html, &options).unwrap().unwrap();
    assert!(text.contains("real article"));
    assert!(!text.contains("teaser block"));
}

#[test]
fn byte_input_honours_declared_charset() {
    let mut html = b"<html><head><meta charset=\"windows-1252\"></head><body>".to_vec();
    html.extend_from_slice(b"<div><p>Caf\xE9 au lait, s'il vous pla\xEEt.</p><p>Merci.</p></div>");
    html.extend_from_slice(b"</body></html>");

    let text = extract_main_text_bytes(&html, &Options::default()).unwrap().unwrap();
    assert!(text.contains("Café au lait"));
    assert!(text.contains("plaît"));

    let markup = extract_main_markup_bytes(&html, &Options::default()).unwrap().unwrap();
    assert!(markup.contains("Café"));
}
