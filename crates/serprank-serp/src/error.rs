use thiserror::Error;

/// Errors returned by a SERP provider.
#[derive(Debug, Error)]
pub enum SerpError {
    /// No API key was configured; raised before any network call.
    #[error("configuration error: SERPAPI_API_KEY is not set")]
    MissingApiKey,

    /// Network or TLS failure, timeout, or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-2xx response carried an `"error"` message in its JSON body.
    #[error("SerpApi error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
