//! On-page SEO analysis for a target page and its top-ranking competitors.
//!
//! [`analyze_page`] turns fetched HTML into [`PageMetrics`] with a fixed
//! additive score; [`analyze_target_vs_top`] runs it over the target URL and
//! the competitor URLs fetched with a [`PageFetcher`].

pub mod compare;
pub mod error;
pub mod fetch;
pub mod page;
pub mod score;
pub mod types;

pub use compare::analyze_target_vs_top;
pub use error::AnalyzerError;
pub use fetch::PageFetcher;
pub use page::analyze_page;
pub use score::{score_metrics, MAX_SCORE};
pub use types::{AnalysisResult, PageMetrics, PageOutcome};
