//! Text and JSON output for a [`RankReport`].

use serprank_analyzer::PageOutcome;

use super::report::{Explanation, RankReport, SerpRow};

/// Rows shown in the context table.
const CONTEXT_ROWS: usize = 10;
const TITLE_WIDTH: usize = 50;

/// Renders the human-readable report.
pub(crate) fn render_text(report: &RankReport, all_results: bool) -> String {
    let mut lines = vec![format!("You entered: {}", report.site_input), String::new()];

    lines.push("1) Ranking of this URL".to_string());
    match &report.url_rank {
        Some(found) => {
            lines.push(format!("  Interpreted URL: {}", report.url_candidate));
            lines.push(format!("  Found at position #{}", found.position));
            lines.push(format!("  On Google page {}", found.page));
            lines.push(format!("  Exact URL in SERP: {}", found.url));
        }
        None => lines.push(format!(
            "  The URL {} is not in the top {} results for '{}' in {}.",
            report.url_candidate,
            report.depth,
            report.keyword,
            report.country.to_uppercase()
        )),
    }
    lines.push(String::new());

    lines.push(format!("2) Ranking of the domain {}", report.domain));
    match &report.domain_rank {
        Some(first) => {
            lines.push(format!("  First appearance of domain {}:", report.domain));
            lines.push(format!("  - Position: #{}", first.position));
            lines.push(format!("  - Google page: Page {}", first.page));
            lines.push(format!("  - URL: {}", first.url));
            if !report.other_domain_hits.is_empty() {
                lines.push("  Other pages from your domain also found:".to_string());
                for hit in &report.other_domain_hits {
                    lines.push(format!(
                        "  - #{} (Page {}) \u{2013} {}",
                        hit.position, hit.page, hit.url
                    ));
                }
            }
        }
        None => lines.push(format!(
            "  No results from {} in the top {} results.",
            report.domain, report.depth
        )),
    }
    lines.push(String::new());

    lines.push(format!("Top {CONTEXT_ROWS} Results (for context)"));
    push_serp_table(&mut lines, report.serp_rows.iter().take(CONTEXT_ROWS));
    lines.push(format!(
        "Showing only top {CONTEXT_ROWS} here for readability, but we searched top {} results for rank calculation.",
        report.depth
    ));
    lines.push(String::new());

    if all_results {
        lines.push(format!("All top {} results", report.depth));
        push_serp_table(&mut lines, report.serp_rows.iter());
        lines.push(String::new());
    }

    lines.push("On-page SEO metrics (you vs top 3)".to_string());
    push_metrics_table(&mut lines, report);
    lines.push(String::new());

    match &report.explanation {
        Explanation::AlreadyTop { rank } => {
            lines.push("Great news!".to_string());
            lines.push(format!(
                "Your site is already in the Top {rank}, so no improvement summary is shown."
            ));
        }
        Explanation::Summary { text } => {
            lines.push("Why your site is not on top".to_string());
            lines.push(text.clone());
        }
    }

    lines.join("\n")
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn render_json(report: &RankReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn push_serp_table<'a>(lines: &mut Vec<String>, rows: impl Iterator<Item = &'a SerpRow>) {
    lines.push(format!(
        "{:<6}{:<6}{:<54}{:<30}{:<6}LINK",
        "POS", "PAGE", "TITLE", "DOMAIN", "YOURS"
    ));
    for row in rows {
        lines.push(format!(
            "{:<6}{:<6}{:<54}{:<30}{:<6}{}",
            row.position,
            row.page,
            truncate(&row.title, TITLE_WIDTH),
            row.domain,
            if row.is_your_site { "yes" } else { "" },
            row.link
        ));
    }
}

fn push_metrics_table(lines: &mut Vec<String>, report: &RankReport) {
    let mut rows: Vec<(String, &PageOutcome)> = Vec::new();
    if let Some(target) = &report.analysis.target {
        rows.push((format!("YOU ({})", report.domain), target));
    }
    for (i, competitor) in report.analysis.competitors.iter().enumerate() {
        rows.push((format!("Top #{}", i + 1), competitor));
    }

    if rows.is_empty() {
        lines.push("Could not analyze pages \u{2013} maybe they failed to load.".to_string());
        return;
    }

    lines.push(format!(
        "{:<28}{:<7}{:<8}{:<7}{:<7}{:<7}URL",
        "WHO", "SCORE", "WORDS", "TITLE", "H1", "META"
    ));
    for (who, outcome) in rows {
        let m = outcome.metrics();
        let url = if outcome.is_fetch_failed() {
            format!("{} (failed to load)", m.url)
        } else {
            m.url.clone()
        };
        lines.push(format!(
            "{:<28}{:<7}{:<8}{:<7}{:<7}{:<7}{}",
            who,
            m.score,
            m.word_count,
            yes_no(m.keyword_in_title),
            yes_no(m.keyword_in_h1),
            yes_no(m.keyword_in_description),
            url
        ));
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
