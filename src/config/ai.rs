//! Model endpoint configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Groq gateway settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key; required at startup.
    pub groq_api_key: Option<String>,

    /// Model identifier sent with every completion.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the OpenAI-compatible endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client-side request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.groq_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("GROQ_API_KEY"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key() -> AiConfig {
        AiConfig {
            groq_api_key: Some("gsk-xxx".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_target_groq() {
        let config = AiConfig::default();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn missing_or_empty_key_fails_validation() {
        assert!(AiConfig::default().validate().is_err());

        let config = AiConfig {
            groq_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = AiConfig {
            base_url: "ftp://example.com".to_string(),
            ..with_key()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl)
        ));
    }

    #[test]
    fn key_plus_defaults_validate() {
        assert!(with_key().validate().is_ok());
    }
}
