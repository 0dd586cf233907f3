//! HTTP client for the `SerpApi` Google search endpoint.
//!
//! Wraps `reqwest` with API key handling, query construction and typed
//! response decoding. Individual organic results that fail to decode are
//! skipped; the page as a whole only fails on transport or API errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::SerpError;
use crate::provider::SerpProvider;
use crate::types::{RawOrganicResult, SearchResponse, SerpQuery};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";

/// Client for `SerpApi`'s `engine=google` search.
///
/// Use [`SerpApiClient::new`] for production or
/// [`SerpApiClient::with_base_url`] to point at a mock server in tests.
pub struct SerpApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl SerpApiClient {
    /// Creates a client pointed at the production `SerpApi` endpoint.
    ///
    /// A missing `api_key` is accepted here and reported by
    /// [`SerpProvider::search`] before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`SerpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: Option<&str>, timeout_secs: u64) -> Result<Self, SerpError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SerpError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SerpError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SerpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("serprank/0.1 (rank-check)")
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| SerpError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
            base_url: parsed,
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, api_key: &str, query: &SerpQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", "google");
            pairs.append_pair("q", &query.keyword);
            pairs.append_pair("api_key", api_key);
            pairs.append_pair("num", &query.result_count.to_string());
            pairs.append_pair("gl", &query.country_code);
            pairs.append_pair("hl", &query.language_code);
        }
        url
    }

    /// Sends the GET request and decodes the search envelope.
    ///
    /// A non-2xx response carrying an `"error"` message becomes
    /// [`SerpError::Api`]; other non-2xx responses become [`SerpError::Http`].
    async fn request(&self, url: Url, query: &SerpQuery) -> Result<SearchResponse, SerpError> {
        let response = self.client.get(url).send().await?;
        let status_error = response.error_for_status_ref().err();
        let body = response.text().await?;

        if let Some(err) = status_error {
            return Err(api_error_message(&body).map_or(SerpError::Http(err), SerpError::Api));
        }

        serde_json::from_str(&body).map_err(|e| SerpError::Deserialize {
            context: format!("search(q={})", query.keyword),
            source: e,
        })
    }
}

#[async_trait]
impl SerpProvider for SerpApiClient {
    async fn search(&self, query: &SerpQuery) -> Result<Vec<RawOrganicResult>, SerpError> {
        let api_key = self.api_key.as_deref().ok_or(SerpError::MissingApiKey)?;

        tracing::info!(
            keyword = %query.keyword,
            num = query.result_count,
            gl = %query.country_code,
            hl = %query.language_code,
            "requesting SERP results"
        );

        let url = self.build_url(api_key, query);
        let envelope = self.request(url, query).await?;

        // SerpApi reports "no results" as an error message on a 200 response.
        if let Some(api_message) = envelope.error.as_deref() {
            tracing::warn!(
                keyword = %query.keyword,
                api_message,
                "SerpApi returned a message instead of results"
            );
        }

        let total = envelope.organic_results.len();
        let results: Vec<RawOrganicResult> = envelope
            .organic_results
            .into_iter()
            .filter_map(|v| serde_json::from_value::<RawOrganicResult>(v).ok())
            .collect();

        tracing::debug!(
            received = total,
            decoded = results.len(),
            "decoded organic results"
        );

        Ok(results)
    }
}

/// Pulls the `"error"` string out of a JSON body, if there is one.
fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
