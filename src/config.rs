// src/config.rs
// Client configuration loaded from the process environment

use anyhow::Result;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl StudioConfig {
    /// Create configuration from the environment. The API key is required;
    /// a missing key fails here, at construction, not on the first call.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY must be set"))?;

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        debug!(
            "Initialized studio config: model={}, timeout={}s",
            model, timeout_secs
        );

        let config = Self { api_key, base_url, model, timeout_secs };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration with custom values (for testing)
    pub fn new(api_key: String, base_url: String, model: String, timeout_secs: u64) -> Self {
        Self { api_key, base_url, model, timeout_secs }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(anyhow::anyhow!("API key cannot be empty"));
        }

        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("Base URL cannot be empty"));
        }

        if self.model.is_empty() {
            return Err(anyhow::anyhow!("Model name cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = StudioConfig::new(
            "".to_string(),
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_MODEL.to_string(),
            30,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_custom_values() {
        let config = StudioConfig::new(
            "test-key".to_string(),
            "http://localhost:8080".to_string(),
            "gemini-2.5-flash".to_string(),
            30,
        );
        assert!(config.validate().is_ok());
    }
}
