//! Target-versus-competitors analysis.

use futures::stream::{self, StreamExt};

use crate::fetch::PageFetcher;
use crate::page::analyze_page;
use crate::types::{AnalysisResult, PageMetrics, PageOutcome};

/// Upper bound on competitor pages fetched at once.
const MAX_CONCURRENT_FETCHES: usize = 4;

/// Analyzes the target page (if any) and each competitor page.
///
/// Each URL is fetched once, independently of the others, so the fetches run
/// concurrently; competitor results keep the order of `top_urls`. A fetch
/// failure yields [`PageOutcome::FetchFailed`] for that URL only. An empty or
/// missing `target_url` leaves [`AnalysisResult::target`] as `None`.
pub async fn analyze_target_vs_top(
    fetcher: &PageFetcher,
    keyword: &str,
    target_url: Option<&str>,
    top_urls: &[String],
) -> AnalysisResult {
    let competitors = stream::iter(top_urls.iter().map(|url| analyze_url(fetcher, keyword, url)))
        .buffered(MAX_CONCURRENT_FETCHES)
        .collect::<Vec<_>>();
    let target = async {
        match target_url.filter(|u| !u.is_empty()) {
            Some(url) => Some(analyze_url(fetcher, keyword, url).await),
            None => None,
        }
    };

    let (competitors, target) = futures::join!(competitors, target);

    let failed = competitors
        .iter()
        .chain(target.iter())
        .filter(|o| o.is_fetch_failed())
        .count();
    tracing::info!(
        competitors = competitors.len(),
        has_target = target.is_some(),
        failed,
        "page analysis complete"
    );

    AnalysisResult {
        target,
        competitors,
    }
}

async fn analyze_url(fetcher: &PageFetcher, keyword: &str, url: &str) -> PageOutcome {
    match fetcher.fetch_html(url).await {
        Some(html) => PageOutcome::Analyzed(analyze_page(Some(&html), url, keyword)),
        None => PageOutcome::FetchFailed(PageMetrics::empty(url)),
    }
}
