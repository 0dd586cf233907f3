/// Runtime configuration for one `serprank` process.
///
/// API keys are optional here: a missing SERP key is reported by the SERP
/// client when a search is attempted, and a missing summarizer key switches
/// the explanation step to its fallback text.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub serp_api_key: Option<String>,
    pub serp_base_url: String,
    pub serp_timeout_secs: u64,
    pub page_timeout_secs: u64,
    pub page_user_agent: String,
    pub summarizer_api_key: Option<String>,
    pub summarizer_base_url: String,
    pub summarizer_model: String,
    pub summarizer_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "serp_api_key",
                &self.serp_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("serp_base_url", &self.serp_base_url)
            .field("serp_timeout_secs", &self.serp_timeout_secs)
            .field("page_timeout_secs", &self.page_timeout_secs)
            .field("page_user_agent", &self.page_user_agent)
            .field(
                "summarizer_api_key",
                &self.summarizer_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("summarizer_base_url", &self.summarizer_base_url)
            .field("summarizer_model", &self.summarizer_model)
            .field("summarizer_timeout_secs", &self.summarizer_timeout_secs)
            .finish()
    }
}
