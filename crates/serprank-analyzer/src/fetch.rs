//! Single-shot page fetching.

use std::time::Duration;

use reqwest::Client;

use crate::error::AnalyzerError;

/// Fetches page HTML with a fixed user agent and timeout.
///
/// There is exactly one attempt per URL. Every failure (invalid URL,
/// connection error, timeout, non-2xx status, undecodable body) is logged and
/// reported as "no HTML" so analysis can continue with the other pages.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Returns the response body, or `None` if the page could not be fetched.
    pub async fn fetch_html(&self, url: &str) -> Option<String> {
        match self.try_fetch(url).await {
            Ok(body) => {
                tracing::debug!(url, bytes = body.len(), "fetched page");
                Some(body)
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "page fetch failed");
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
