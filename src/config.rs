//! Client Configuration
//!
//! Defaults are production values; `SPLIT_API_BASE_URL` and `SPLIT_LOG_LEVEL`
//! override them at build time.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Runtime configuration for the client
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend root, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,
    /// localStorage key holding the persisted session
    #[serde(default = "default_session_storage_key")]
    pub session_storage_key: String,
}

fn default_api_base_url() -> String {
    "http://localhost:5105".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_toast_duration_ms() -> u32 {
    4000
}

fn default_session_storage_key() -> String {
    "split.session".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            log_level: default_log_level(),
            toast_duration_ms: default_toast_duration_ms(),
            session_storage_key: default_session_storage_key(),
        }
    }
}

impl AppConfig {
    /// Defaults with build-time environment overrides applied
    pub fn load() -> Self {
        Self::default().with_overrides(option_env!("SPLIT_API_BASE_URL"), option_env!("SPLIT_LOG_LEVEL"))
    }

    fn with_overrides(mut self, api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            self.log_level = level.to_string();
        }
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self
    }

    /// Join a path onto the API base
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Unknown level names fall back to Info
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5105");
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = AppConfig::default().with_overrides(Some("https://api.split.test/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.split.test");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.endpoint("/Receipt/user"), "https://api.split.test/Receipt/user");

        let blank = AppConfig::default().with_overrides(Some("  "), Some("nonsense"));
        assert_eq!(blank.api_base_url, "http://localhost:5105");
        assert_eq!(blank.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"log_level":"warn"}"#).unwrap();
        assert_eq!(config.session_storage_key, "split.session");
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }
}
