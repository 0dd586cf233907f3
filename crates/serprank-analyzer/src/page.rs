//! HTML signal extraction for a single page.

use std::sync::OnceLock;

use scraper::{Html, Node, Selector};

use crate::score::score_metrics;
use crate::types::PageMetrics;

/// Elements whose text never counts as page content.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript"];

/// Computes on-page SEO signals and the heuristic score for one page.
///
/// `html` is `None` (or empty) when the page could not be fetched; the result
/// is then [`PageMetrics::empty`] with a score of `0`.
///
/// Keyword checks are case-insensitive substring tests. Density counts raw
/// occurrences of the keyword phrase in the page text, so `"shoes"` also
/// counts inside `"snowshoes"`.
#[must_use]
pub fn analyze_page(html: Option<&str>, url: &str, keyword: &str) -> PageMetrics {
    let Some(html) = html.filter(|h| !h.is_empty()) else {
        return PageMetrics::empty(url);
    };

    let keyword_lower = keyword.to_lowercase();
    let document = Html::parse_document(html);

    let title = first_element_text(&document, title_selector());
    let meta_description = meta_description(&document);
    let h1 = first_element_text(&document, h1_selector());

    let text = visible_text(&document);
    let word_count = text.split_whitespace().count();
    let keyword_density = keyword_density(&text, &keyword_lower, word_count);

    let url_lower = url.to_lowercase();
    let keyword_in_url = url_lower.contains(&keyword_lower.replace(' ', "-"))
        || url_lower.contains(&keyword_lower);

    let mut metrics = PageMetrics {
        url: url.to_string(),
        keyword_in_title: title.to_lowercase().contains(&keyword_lower),
        keyword_in_description: meta_description.to_lowercase().contains(&keyword_lower),
        keyword_in_h1: h1.to_lowercase().contains(&keyword_lower),
        keyword_in_url,
        title,
        meta_description,
        h1,
        word_count,
        keyword_density,
        score: 0,
    };
    metrics.score = score_metrics(&metrics);

    tracing::debug!(
        url,
        word_count,
        keyword_density,
        score = metrics.score,
        "analyzed page"
    );

    metrics
}

fn title_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("title").expect("valid title selector"))
}

fn h1_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("h1").expect("valid h1 selector"))
}

fn meta_description_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(r#"meta[name="description"]"#).expect("valid meta description selector")
    })
}

/// Whitespace-collapsed text of the first element matching `selector`.
fn first_element_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

fn meta_description(document: &Html) -> String {
    document
        .select(meta_description_selector())
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// All document text outside `script`, `style` and `noscript`, with every
/// whitespace run collapsed to one space.
fn visible_text(document: &Html) -> String {
    let mut raw = String::new();
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if NON_CONTENT_TAGS.contains(&el.name()))
        });
        if !hidden {
            raw.push_str(text);
            raw.push(' ');
        }
    }
    collapse_whitespace(&raw)
}

#[allow(clippy::cast_precision_loss)]
fn keyword_density(text: &str, keyword_lower: &str, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let occurrences = text.to_lowercase().matches(keyword_lower).count();
    occurrences as f64 / word_count as f64
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
