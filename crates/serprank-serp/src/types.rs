//! SERP request and result types.

use serde::{Deserialize, Serialize};

/// Smallest result count requested from the provider.
pub const MIN_RESULT_COUNT: u32 = 10;
/// Largest result count the provider serves for one Google query.
pub const MAX_RESULT_COUNT: u32 = 100;

/// Parameters for one search-results request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpQuery {
    pub keyword: String,
    /// Always within [`MIN_RESULT_COUNT`]..=[`MAX_RESULT_COUNT`].
    pub result_count: u32,
    /// Google `gl` country code, e.g. `"us"`.
    pub country_code: String,
    /// Google `hl` interface language, e.g. `"en"`.
    pub language_code: String,
}

impl SerpQuery {
    /// Builds a query, clamping `result_count` into the provider's range.
    #[must_use]
    pub fn new(keyword: &str, result_count: u32, country_code: &str, language_code: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            result_count: result_count.clamp(MIN_RESULT_COUNT, MAX_RESULT_COUNT),
            country_code: country_code.to_string(),
            language_code: language_code.to_string(),
        }
    }
}

/// Top-level `SerpApi` search response. Only the fields we read are modelled.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub error: Option<String>,
    /// Kept as raw values so one malformed entry does not sink the page.
    #[serde(default)]
    pub organic_results: Vec<serde_json::Value>,
}

/// One organic result as delivered by the provider.
///
/// Every field is optional on the wire; entries without a usable `link` or
/// `position` are dropped by [`crate::normalize_serp_results`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawOrganicResult {
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// A cleaned search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultEntry {
    /// 1-based global rank on the results page.
    pub position: u32,
    pub link: String,
    pub title: String,
    pub snippet: String,
    /// Normalized domain of `link`.
    pub domain: String,
}
