use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.serp_api_key.is_none());
    assert!(cfg.summarizer_api_key.is_none());
    assert_eq!(cfg.serp_base_url, DEFAULT_SERP_BASE_URL);
    assert_eq!(cfg.serp_timeout_secs, 20);
    assert_eq!(cfg.page_timeout_secs, 15);
    assert_eq!(cfg.page_user_agent, DEFAULT_PAGE_USER_AGENT);
    assert_eq!(cfg.summarizer_base_url, DEFAULT_SUMMARIZER_BASE_URL);
    assert_eq!(cfg.summarizer_model, "llama-3.3-70b-versatile");
    assert_eq!(cfg.summarizer_timeout_secs, 30);
}

#[test]
fn build_app_config_reads_api_keys() {
    let mut map = HashMap::new();
    map.insert("SERPAPI_API_KEY", "serp-secret");
    map.insert("GROQ_API_KEY", "groq-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.serp_api_key.as_deref(), Some("serp-secret"));
    assert_eq!(cfg.summarizer_api_key.as_deref(), Some("groq-secret"));
}

#[test]
fn build_app_config_treats_blank_keys_as_missing() {
    let mut map = HashMap::new();
    map.insert("SERPAPI_API_KEY", "   ");
    map.insert("GROQ_API_KEY", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.serp_api_key.is_none());
    assert!(cfg.summarizer_api_key.is_none());
}

#[test]
fn serp_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("SERPRANK_SERP_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.serp_timeout_secs, 45);
}

#[test]
fn serp_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("SERPRANK_SERP_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SERPRANK_SERP_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SERPRANK_SERP_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn page_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("SERPRANK_PAGE_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SERPRANK_PAGE_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SERPRANK_PAGE_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn summarizer_overrides() {
    let mut map = HashMap::new();
    map.insert("SERPRANK_SUMMARIZER_MODEL", "llama-3.1-8b-instant");
    map.insert("SERPRANK_SUMMARIZER_BASE_URL", "http://localhost:9999/v1");
    map.insert("SERPRANK_SUMMARIZER_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.summarizer_model, "llama-3.1-8b-instant");
    assert_eq!(cfg.summarizer_base_url, "http://localhost:9999/v1");
    assert_eq!(cfg.summarizer_timeout_secs, 5);
}

#[test]
fn page_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SERPRANK_PAGE_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_user_agent, "custom-agent/2.0");
}

#[test]
fn debug_output_redacts_keys() {
    let mut map = HashMap::new();
    map.insert("SERPAPI_API_KEY", "serp-secret");
    map.insert("GROQ_API_KEY", "groq-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("serp-secret"));
    assert!(!rendered.contains("groq-secret"));
    assert!(rendered.contains("[redacted]"));
}
