use serde::Serialize;

/// On-page SEO signals for one URL and the heuristic score derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetrics {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub h1: String,
    pub word_count: usize,
    pub keyword_in_title: bool,
    pub keyword_in_description: bool,
    pub keyword_in_h1: bool,
    pub keyword_in_url: bool,
    /// Keyword occurrences per word, in `[0, 1]` for non-empty keywords.
    pub keyword_density: f64,
    pub score: u32,
}

impl PageMetrics {
    /// Metrics for a page that could not be analyzed: empty text, no
    /// keyword hits, score `0`.
    #[must_use]
    pub fn empty(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: String::new(),
            meta_description: String::new(),
            h1: String::new(),
            word_count: 0,
            keyword_in_title: false,
            keyword_in_description: false,
            keyword_in_h1: false,
            keyword_in_url: false,
            keyword_density: 0.0,
            score: 0,
        }
    }
}

/// Result of analyzing one URL.
///
/// A failed fetch still carries zeroed [`PageMetrics`] so it can sit in a
/// comparison table next to real pages. A fetched page with no words is
/// `Analyzed` with the same zeroed numbers; only the tag tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "metrics", rename_all = "snake_case")]
pub enum PageOutcome {
    Analyzed(PageMetrics),
    FetchFailed(PageMetrics),
}

impl PageOutcome {
    #[must_use]
    pub fn metrics(&self) -> &PageMetrics {
        match self {
            Self::Analyzed(m) | Self::FetchFailed(m) => m,
        }
    }

    #[must_use]
    pub fn is_fetch_failed(&self) -> bool {
        matches!(self, Self::FetchFailed(_))
    }
}

/// The target page (when one was known) and the competitor pages, in the
/// order their URLs were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub target: Option<PageOutcome>,
    pub competitors: Vec<PageOutcome>,
}
