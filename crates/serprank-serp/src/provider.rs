use async_trait::async_trait;

use crate::error::SerpError;
use crate::types::{RawOrganicResult, SerpQuery};

/// Anything that can answer a search query with organic results.
///
/// [`crate::SerpApiClient`] is the production implementation; tests supply
/// canned results.
#[async_trait]
pub trait SerpProvider: Send + Sync {
    /// Returns the organic results for `query` in provider order.
    ///
    /// # Errors
    ///
    /// Implementations return [`SerpError`] when the provider cannot be
    /// queried. An empty result list is not an error.
    async fn search(&self, query: &SerpQuery) -> Result<Vec<RawOrganicResult>, SerpError>;
}
