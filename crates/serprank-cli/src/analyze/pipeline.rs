//! End-to-end rank check over injected collaborators.

use serprank_analyzer::{analyze_target_vs_top, PageFetcher};
use serprank_serp::{
    find_all_domain_positions, find_domain_rank, find_url_rank, normalize_domain,
    normalize_serp_results, url_candidate, SerpProvider, SerpQuery,
};
use serprank_summarizer::{Summarizer, SummaryRequest};
use thiserror::Error;

use super::report::{Explanation, RankReport, RankedUrl, SerpRow, TOP_RANK_CUTOFF};

/// Number of top results analyzed as competitors.
const COMPETITOR_COUNT: usize = 3;

#[derive(Debug, Error)]
#[error("Please enter both a keyword and a site/URL.")]
pub struct MissingInput;

#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub keyword: String,
    /// A bare domain or a full URL.
    pub site: String,
    pub depth: u32,
    pub country: String,
    pub language: String,
}

/// Runs one rank check.
///
/// The steps are sequential: SERP query, rank lookups, page analysis of the
/// target and the top three results, then an explanation unless the site
/// already ranks in the top three. The summarizer is not called in that case.
///
/// # Errors
///
/// Returns [`MissingInput`] if the keyword or site is blank (before any
/// request), or the first SERP or summarizer error. Page fetch failures are
/// not errors; they show up as failed outcomes in the analysis.
pub(crate) async fn run_analysis(
    serp: &dyn SerpProvider,
    summarizer: &dyn Summarizer,
    fetcher: &PageFetcher,
    input: &AnalysisInput,
) -> anyhow::Result<RankReport> {
    let keyword = input.keyword.trim();
    let site_input = input.site.trim();
    if keyword.is_empty() || site_input.is_empty() {
        return Err(MissingInput.into());
    }

    let domain = normalize_domain(site_input);
    let candidate = url_candidate(site_input);
    let query = SerpQuery::new(keyword, input.depth, &input.country, &input.language);

    tracing::info!(
        keyword,
        domain = %domain,
        depth = query.result_count,
        country = %query.country_code,
        "fetching search results"
    );
    let raw = serp.search(&query).await?;
    let rows = normalize_serp_results(raw);

    let domain_match = find_domain_rank(&rows, &domain);
    let domain_hits = find_all_domain_positions(&rows, &domain);
    let url_match = find_url_rank(&rows, &candidate);
    tracing::info!(
        results = rows.len(),
        domain_rank = ?domain_match.rank,
        url_rank = ?url_match.rank,
        "ranks resolved"
    );

    let target_url = url_match.url.as_deref().or(domain_match.url.as_deref());
    let top_urls: Vec<String> = rows
        .iter()
        .take(COMPETITOR_COUNT)
        .map(|row| row.link.clone())
        .collect();
    let analysis = analyze_target_vs_top(fetcher, keyword, target_url, &top_urls).await;

    let effective_rank = domain_match.rank.or(url_match.rank);
    let explanation = match effective_rank {
        Some(rank) if rank <= TOP_RANK_CUTOFF => Explanation::AlreadyTop { rank },
        _ => {
            let text = summarizer
                .summarize(SummaryRequest {
                    keyword,
                    domain: &domain,
                    rank: effective_rank,
                    serp_rows: &rows,
                    analysis: &analysis,
                })
                .await?;
            Explanation::Summary { text }
        }
    };

    let serp_rows = rows
        .iter()
        .map(|entry| SerpRow::from_entry(entry, &domain))
        .collect();

    Ok(RankReport {
        keyword: keyword.to_string(),
        site_input: site_input.to_string(),
        country: query.country_code,
        language: query.language_code,
        depth: query.result_count,
        url_candidate: candidate,
        url_rank: RankedUrl::from_match(&url_match),
        domain_rank: RankedUrl::from_match(&domain_match),
        other_domain_hits: domain_hits.iter().skip(1).map(RankedUrl::from).collect(),
        domain,
        serp_rows,
        analysis,
        effective_rank,
        explanation,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
