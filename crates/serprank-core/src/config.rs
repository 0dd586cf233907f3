use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SERP_BASE_URL: &str = "https://serpapi.com/search.json";
pub const DEFAULT_SUMMARIZER_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_SUMMARIZER_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_PAGE_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SEOProjectBot/1.0; +https://example.com/bot)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Empty keys are treated the same as unset ones.
    let optional_secret = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("SERPRANK_LOG_LEVEL", "info");

    let serp_api_key = optional_secret("SERPAPI_API_KEY");
    let serp_base_url = or_default("SERPRANK_SERP_BASE_URL", DEFAULT_SERP_BASE_URL);
    let serp_timeout_secs = parse_u64("SERPRANK_SERP_TIMEOUT_SECS", "20")?;

    let page_timeout_secs = parse_u64("SERPRANK_PAGE_TIMEOUT_SECS", "15")?;
    let page_user_agent = or_default("SERPRANK_PAGE_USER_AGENT", DEFAULT_PAGE_USER_AGENT);

    let summarizer_api_key = optional_secret("GROQ_API_KEY");
    let summarizer_base_url = or_default(
        "SERPRANK_SUMMARIZER_BASE_URL",
        DEFAULT_SUMMARIZER_BASE_URL,
    );
    let summarizer_model = or_default("SERPRANK_SUMMARIZER_MODEL", DEFAULT_SUMMARIZER_MODEL);
    let summarizer_timeout_secs = parse_u64("SERPRANK_SUMMARIZER_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        log_level,
        serp_api_key,
        serp_base_url,
        serp_timeout_secs,
        page_timeout_secs,
        page_user_agent,
        summarizer_api_key,
        summarizer_base_url,
        summarizer_model,
        summarizer_timeout_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
