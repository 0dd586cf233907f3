//! Groq chat-completions client.
//!
//! Groq exposes an OpenAI-compatible API, so the request is a plain
//! `POST {base}/chat/completions` with a bearer token, and the answer is the
//! first choice's message content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::json;

use crate::error::SummarizerError;
use crate::prompt::build_summary_prompt;
use crate::{Summarizer, SummaryRequest};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f64 = 0.4;

/// Returned instead of a model answer when no API key is configured.
pub const FALLBACK_SUMMARY: &str = "GROQ_API_KEY is not set. Cannot generate AI summary. \
     You can still inspect the raw metrics above.";

pub const SYSTEM_PROMPT: &str = "You are an SEO expert. Be concise and practical. \
     Use simple language and bullet points. \
     Do not make information on your own heavily rely on the information provided to you.";

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct GroqSummarizer {
    client: Client,
    api_key: Option<String>,
    model: String,
    completions_url: Url,
}

impl GroqSummarizer {
    /// Creates a summarizer pointed at the production Groq endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, SummarizerError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a summarizer against any OpenAI-compatible base URL, such as
    /// a wiremock server in tests.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SummarizerError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let completions_url = Url::parse(&format!(
            "{}/chat/completions",
            base_url.trim_end_matches('/')
        ))
        .map_err(|e| SummarizerError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
            model: model.to_string(),
            completions_url,
        })
    }

    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, SummarizerError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ],
            "temperature": TEMPERATURE
        });

        let response = self
            .client
            .post(self.completions_url.clone())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(SummarizerError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let completion: ChatCompletion =
            serde_json::from_str(&text).map_err(|source| SummarizerError::Deserialize {
                context: "chat completion".to_string(),
                source,
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(SummarizerError::EmptyResponse)
    }
}

#[async_trait]
impl Summarizer for GroqSummarizer {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String, SummarizerError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!("summarizer API key not set; returning fallback text");
            return Ok(FALLBACK_SUMMARY.to_string());
        };

        let prompt = build_summary_prompt(&request);
        tracing::info!(
            model = %self.model,
            keyword = request.keyword,
            prompt_chars = prompt.len(),
            "requesting summary"
        );
        let summary = self.complete(api_key, &prompt).await?;
        tracing::debug!(summary_chars = summary.len(), "summary received");
        Ok(summary)
    }
}

/// Pulls `error.message` out of an OpenAI-style error body, falling back to
/// the raw body text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message").or(Some(e)))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
