//! User prompt rendering.

use serprank_analyzer::PageMetrics;

use crate::SummaryRequest;

const SERP_ROWS: usize = 5;
const COMPETITORS: usize = 3;
const TITLE_CHARS: usize = 80;

/// Renders the user prompt: keyword, domain and rank, the top five SERP rows,
/// target page signals, the top three competitors, and the closing request
/// for 4 to 6 bullet-point improvements.
#[must_use]
pub fn build_summary_prompt(request: &SummaryRequest<'_>) -> String {
    let rank = request
        .rank
        .map_or_else(|| "Not in top 10".to_string(), |r| r.to_string());

    let mut lines = vec![
        format!("Keyword: {}", request.keyword),
        format!("Target domain: {}", request.domain),
        format!("Current rank: {rank}"),
        String::new(),
        "Top 5 search results:".to_string(),
    ];

    for row in request.serp_rows.iter().take(SERP_ROWS) {
        let title: String = row.title.chars().take(TITLE_CHARS).collect();
        lines.push(format!(
            "- #{} | {} | title: {title}",
            row.position, row.domain
        ));
    }

    lines.push(String::new());
    lines.push("Target page analysis:".to_string());
    match &request.analysis.target {
        Some(target) => lines.extend(target_lines(target.metrics())),
        None => lines
            .push("- Target site is not in the SERP, so we could not analyze it.".to_string()),
    }

    lines.push(String::new());
    lines.push("Competitor pages (usually top results):".to_string());
    for outcome in request.analysis.competitors.iter().take(COMPETITORS) {
        let c = outcome.metrics();
        lines.push(format!("- URL: {}", c.url));
        lines.push(format!(
            "  score: {}, words: {}, keyword_in_title: {}, keyword_in_h1: {}, keyword_in_description: {}",
            c.score, c.word_count, c.keyword_in_title, c.keyword_in_h1, c.keyword_in_description
        ));
    }

    lines.push(String::new());
    lines.push(
        "Based on this data, explain in simple language why the target site \
         is not ranking at the top for this keyword, and give 4–6 specific, \
         actionable improvements. Use short bullet points."
            .to_string(),
    );

    lines.join("\n")
}

fn target_lines(m: &PageMetrics) -> [String; 6] {
    [
        format!("- URL: {}", m.url),
        format!("- score: {}", m.score),
        format!("- word_count: {}", m.word_count),
        format!("- keyword_in_title: {}", m.keyword_in_title),
        format!("- keyword_in_h1: {}", m.keyword_in_h1),
        format!("- keyword_in_description: {}", m.keyword_in_description),
    ]
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
