use super::*;

fn words(word: &str, n: usize) -> String {
    vec![word; n].join(" ")
}

#[test]
fn missing_html_scores_zero() {
    for (url, keyword) in [
        ("https://example.com/running-shoes", "running shoes"),
        ("", ""),
        ("https://x.io", "x"),
    ] {
        let m = analyze_page(None, url, keyword);
        assert_eq!(m.score, 0);
        assert_eq!(m, PageMetrics::empty(url));
    }
}

#[test]
fn empty_html_is_treated_as_missing() {
    let m = analyze_page(Some(""), "https://example.com/running-shoes", "running shoes");
    assert_eq!(m, PageMetrics::empty("https://example.com/running-shoes"));
}

#[test]
fn title_word_count_and_density_score_five() {
    // The title contributes 3 words and one keyword hit to the page text.
    let body = format!(
        "{} {}",
        words("running shoes", 9),
        words("lorem", 1000 - 3 - 18)
    );
    let html = format!(
        "<html><head><title>Best Running Shoes</title></head><body><p>{body}</p></body></html>"
    );

    let m = analyze_page(Some(&html), "https://example.com/page", "running shoes");

    assert_eq!(m.title, "Best Running Shoes");
    assert_eq!(m.word_count, 1000);
    assert!((m.keyword_density - 0.01).abs() < f64::EPSILON);
    assert!(m.keyword_in_title);
    assert!(!m.keyword_in_h1);
    assert!(!m.keyword_in_description);
    assert!(!m.keyword_in_url);
    assert_eq!(m.score, 5);
}

#[test]
fn extracts_title_description_and_first_h1() {
    let html = r#"<!doctype html>
        <html>
          <head>
            <title>
              Trail Guide
            </title>
            <meta name="description" content="  Shop running shoes today  ">
          </head>
          <body>
            <h1>Best <em>Running</em>   Shoes</h1>
            <h1>Second heading</h1>
            <p>Some text.</p>
          </body>
        </html>"#;

    let m = analyze_page(Some(html), "https://shop.com/c", "running shoes");

    assert_eq!(m.title, "Trail Guide");
    assert_eq!(m.meta_description, "Shop running shoes today");
    assert_eq!(m.h1, "Best Running Shoes");
    assert!(m.keyword_in_description);
    assert!(m.keyword_in_h1);
    assert!(!m.keyword_in_title);
}

#[test]
fn missing_elements_default_to_empty_strings() {
    let m = analyze_page(
        Some("<html><body><p>hello world</p></body></html>"),
        "https://a.com",
        "hello",
    );
    assert_eq!(m.title, "");
    assert_eq!(m.meta_description, "");
    assert_eq!(m.h1, "");
    assert_eq!(m.word_count, 2);
}

#[test]
fn script_style_and_noscript_text_is_ignored() {
    let html = r"<html><head>
        <style>body { color: red; } shoes shoes</style>
        <script>var shoes = 'shoes shoes shoes';</script>
        </head><body>
        <noscript>enable javascript shoes</noscript>
        <p>one two shoes</p>
        <script type='application/ld+json'>{}</script>
        </body></html>";

    let m = analyze_page(Some(html), "https://a.com", "shoes");
    assert_eq!(m.word_count, 3);
    assert!((m.keyword_density - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn zero_words_gives_zero_density() {
    let html = "<html><head><script>let a = 1;</script></head><body>   </body></html>";
    let m = analyze_page(Some(html), "https://a.com/shoes", "shoes");
    assert_eq!(m.word_count, 0);
    assert!(m.keyword_density.abs() < f64::EPSILON);
    assert!(m.keyword_in_url);
    assert_eq!(m.score, 1);
}

#[test]
fn density_counts_substrings_not_whole_words() {
    let html = "<html><body><p>Snowshoes and SHOES and shoeshine</p></body></html>";
    let m = analyze_page(Some(html), "https://a.com", "shoes");
    // "snowshoes", "shoes", "shoeshine" all contain the phrase.
    assert_eq!(m.word_count, 5);
    assert!((m.keyword_density - 3.0 / 5.0).abs() < 1e-9);
}

#[test]
fn url_check_accepts_slugified_keyword() {
    let html = "<html><body><p>x</p></body></html>";
    let slug = analyze_page(
        Some(html),
        "https://shop.com/Best-Running-Shoes",
        "running shoes",
    );
    assert!(slug.keyword_in_url);

    let plain = analyze_page(Some(html), "https://shop.com/search?q=running shoes", "running shoes");
    assert!(plain.keyword_in_url);

    let miss = analyze_page(Some(html), "https://shop.com/running_shoes", "running shoes");
    assert!(!miss.keyword_in_url);
}

#[test]
fn text_nodes_are_space_separated() {
    let html = "<html><body><div>alpha</div><div>beta</div><span>gamma</span></body></html>";
    let m = analyze_page(Some(html), "https://a.com", "alphabeta");
    assert_eq!(m.word_count, 3);
    assert!(m.keyword_density.abs() < f64::EPSILON);
}
