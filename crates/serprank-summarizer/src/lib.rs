//! Plain-language explanations of a ranking result.
//!
//! [`Summarizer`] is the seam; [`GroqSummarizer`] implements it against an
//! OpenAI-compatible chat-completions endpoint, and [`build_summary_prompt`]
//! renders the facts the model is given.

pub mod error;
pub mod groq;
pub mod prompt;

use async_trait::async_trait;
use serprank_analyzer::AnalysisResult;
use serprank_serp::SearchResultEntry;

pub use error::SummarizerError;
pub use groq::{GroqSummarizer, DEFAULT_MODEL, FALLBACK_SUMMARY, SYSTEM_PROMPT};
pub use prompt::build_summary_prompt;

/// Everything a summarizer is told about one ranking check.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRequest<'a> {
    pub keyword: &'a str,
    pub domain: &'a str,
    /// Effective rank of the target, `None` when it was not found.
    pub rank: Option<u32>,
    /// Normalized SERP rows; only the first five are used.
    pub serp_rows: &'a [SearchResultEntry],
    /// Target and competitor page analysis; only three competitors are used.
    pub analysis: &'a AnalysisResult,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Explains why the target is not ranking higher and how to improve.
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String, SummarizerError>;
}
