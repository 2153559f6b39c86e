//! Process configuration (env > `.env` file > defaults).

use std::fmt;
use std::time::Duration;

use bon::Builder;

use crate::error::{AssistantError, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration, built once at startup and passed by reference
/// to the providers.
///
/// Only the Gemini key is mandatory. The search credentials are checked
/// when a search is actually issued.
#[derive(Clone, Builder)]
pub struct AssistantConfig {
    #[builder(into)]
    gemini_api_key: String,
    #[builder(into)]
    search_api_key: Option<String>,
    #[builder(into)]
    search_engine_id: Option<String>,
    #[builder(into, default = DEFAULT_MODEL.to_string())]
    model: String,
    #[builder(into, default = DEFAULT_GEMINI_BASE_URL.to_string())]
    gemini_base_url: String,
    #[builder(into, default = DEFAULT_SEARCH_BASE_URL.to_string())]
    search_base_url: String,
    #[builder(default = DEFAULT_TIMEOUT)]
    timeout: Duration,
}

impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("gemini_api_key", &"..")
            .field("search_api_key", &self.search_api_key.as_ref().map(|_| ".."))
            .field("search_engine_id", &self.search_engine_id)
            .field("model", &self.model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("search_base_url", &self.search_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AssistantConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = get("GEMINI_API_KEY")
            .or_else(|| get("GOOGLE_API_KEY"))
            .ok_or_else(|| {
                AssistantError::Configuration(
                    "GEMINI_API_KEY not found. Please add it to your .env file.".into(),
                )
            })?;

        let timeout = match get("ASSISTANT_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self::builder()
            .gemini_api_key(gemini_api_key)
            .maybe_search_api_key(get("SEARCH_API_KEY"))
            .maybe_search_engine_id(get("SEARCH_ENGINE_ID"))
            .model(get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
            .gemini_base_url(
                get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            )
            .search_base_url(
                get("SEARCH_BASE_URL").unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string()),
            )
            .timeout(timeout)
            .build())
    }

    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }

    pub fn search_api_key(&self) -> Option<&str> {
        self.search_api_key.as_deref()
    }

    pub fn search_engine_id(&self) -> Option<&str> {
        self.search_engine_id.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn gemini_base_url(&self) -> &str {
        self.gemini_base_url.trim_end_matches('/')
    }

    pub fn search_base_url(&self) -> &str {
        self.search_base_url.trim_end_matches('/')
    }

    /// Per-request timeout applied to every outbound call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether both search credentials are present.
    pub fn has_search_credentials(&self) -> bool {
        self.search_api_key.is_some() && self.search_engine_id.is_some()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AssistantError::Configuration(format!(
            "ASSISTANT_TIMEOUT_SECS must be a positive number of seconds, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_gemini_key_is_a_configuration_error() {
        let err = AssistantConfig::from_lookup(lookup_from(&[("SEARCH_API_KEY", "s")])).unwrap_err();
        assert!(matches!(err, AssistantError::Configuration(msg) if msg.contains("GEMINI_API_KEY")));
    }

    #[test]
    fn blank_gemini_key_counts_as_missing() {
        let err = AssistantConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, AssistantError::Configuration(_)));
    }

    #[test]
    fn google_api_key_is_accepted_as_fallback() {
        let config = AssistantConfig::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "g-key")])).unwrap();
        assert_eq!(config.gemini_api_key(), "g-key");
    }

    #[test]
    fn gemini_key_wins_over_google_key() {
        let config = AssistantConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "gemini"),
            ("GOOGLE_API_KEY", "google"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key(), "gemini");
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = AssistantConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.gemini_base_url(), DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.search_base_url(), DEFAULT_SEARCH_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(!config.has_search_credentials());
    }

    #[test]
    fn overrides_are_read() {
        let config = AssistantConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("SEARCH_API_KEY", "s"),
            ("SEARCH_ENGINE_ID", "cx"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_BASE_URL", "http://localhost:9000/"),
            ("ASSISTANT_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.model(), "gemini-2.0-flash");
        assert_eq!(config.gemini_base_url(), "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.has_search_credentials());
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        for raw in ["0", "soon", "-3"] {
            let err = AssistantConfig::from_lookup(lookup_from(&[
                ("GEMINI_API_KEY", "k"),
                ("ASSISTANT_TIMEOUT_SECS", raw),
            ]))
            .unwrap_err();
            assert!(matches!(err, AssistantError::Configuration(msg) if msg.contains(raw)));
        }
    }

    #[test]
    fn debug_output_redacts_keys() {
        let config = AssistantConfig::builder()
            .gemini_api_key("secret-gemini")
            .search_api_key("secret-search")
            .build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-gemini"));
        assert!(!debug.contains("secret-search"));
    }
}
