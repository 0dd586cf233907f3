use thiserror::Error;

/// Errors from setting up page analysis.
///
/// Individual page fetches never produce an error; see
/// [`crate::PageFetcher::fetch_html`].
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
