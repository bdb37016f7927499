use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::LogLevel(other.to_string())),
        }
    }
}

/// Front end settings. Every field has a default so a partial JSON document
/// (or none at all) is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LogLevel,
    /// Delay between a successful form submit and the return to the dashboard
    pub redirect_delay_ms: u32,
    /// Local storage key holding the bearer token
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            log_level: LogLevel::Info,
            redirect_delay_ms: 1500,
            token_storage_key: "token".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply overrides (typically baked in at build time). Blank values are
    /// ignored; a trailing slash on the base URL is dropped.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
            self.log_level = level.parse()?;
        }
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Build-time configuration: an optional JSON document, then the
    /// individual overrides on top of it.
    pub fn from_sources(
        json: Option<&str>,
        api_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base = match json.map(str::trim).filter(|j| !j.is_empty()) {
            Some(json) => Self::from_json(json)?,
            None => Self::default(),
        };
        base.with_overrides(api_base_url, log_level)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.redirect_delay_ms, 1500);
        assert_eq!(config.url("/api/students"), "http://localhost:8080/api/students");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"apiBaseUrl":"https://vax.example.org","logLevel":"debug"}"#)
            .unwrap();
        assert_eq!(config.api_base_url, "https://vax.example.org");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_overrides(Some("https://api.school.test/"), Some("WARN"))
            .unwrap();
        assert_eq!(config.api_base_url, "https://api.school.test");
        assert_eq!(config.log_level, LogLevel::Warn);

        let unchanged = AppConfig::default().with_overrides(Some(" "), None).unwrap();
        assert_eq!(unchanged, AppConfig::default());

        assert!(AppConfig::default().with_overrides(None, Some("loud")).is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_sources_layer_overrides_on_json() {
        let config = AppConfig::from_sources(
            Some(r#"{"redirectDelayMs":500,"apiBaseUrl":"https://json.example"}"#),
            Some("https://env.example/"),
            None,
        )
        .unwrap();
        assert_eq!(config.redirect_delay_ms, 500);
        assert_eq!(config.api_base_url, "https://env.example");

        assert_eq!(AppConfig::from_sources(None, None, None).unwrap(), AppConfig::default());
        assert!(AppConfig::from_sources(Some("[1,2]"), None, None).is_err());
    }
}
