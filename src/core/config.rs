//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::core::errors::{AppError, Result};

/// Remote model-serving endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api.mentorpiece.org/v1/process-ai-request";

/// Environment variable holding the bearer token
pub const DEFAULT_CREDENTIAL_VAR: &str = "API_KEY";

/// Model that produces the translation
pub const DEFAULT_TRANSLATOR_MODEL: &str = "Qwen/Qwen3-VL-30B-A3B-Instruct";

/// Model that grades the translation
pub const DEFAULT_JUDGE_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL every model call is POSTed to
    pub api_endpoint: String,
    /// Name of the variable the credential is read from on every call
    pub credential_var: String,
    /// Model producing the translation
    pub translator_model: String,
    /// Model grading the translation
    pub judge_model: String,
    /// Outbound request timeout. `None` leaves the transport default (no timeout).
    pub timeout_ms: Option<u64>,
    /// Server bind host
    pub host: String,
    /// Server listen port
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            credential_var: DEFAULT_CREDENTIAL_VAR.to_string(),
            translator_model: DEFAULT_TRANSLATOR_MODEL.to_string(),
            judge_model: DEFAULT_JUDGE_MODEL.to_string(),
            timeout_ms: None,
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The credential itself is not read here; see [`crate::core::credential::EnvCredential`].
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_endpoint = std::env::var("API_ENDPOINT").unwrap_or(defaults.api_endpoint);

        let translator_model =
            std::env::var("TRANSLATOR_MODEL").unwrap_or(defaults.translator_model);

        let judge_model = std::env::var("JUDGE_MODEL").unwrap_or(defaults.judge_model);

        let timeout_ms = match std::env::var("REQUEST_TIMEOUT_MS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| AppError::ConfigError {
                message: format!("REQUEST_TIMEOUT_MS: {}", e),
            })?),
            Err(_) => None,
        };

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| AppError::ConfigError {
                message: format!("PORT: {}", e),
            })?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            api_endpoint,
            credential_var: defaults.credential_var,
            translator_model,
            judge_model,
            timeout_ms,
            host,
            port,
        })
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(AppError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.credential_var.is_empty() {
            return Err(AppError::ConfigError {
                message: "credential variable name is required".to_string(),
            });
        }

        if self.translator_model.is_empty() || self.judge_model.is_empty() {
            return Err(AppError::ConfigError {
                message: "both translator and judge models are required".to_string(),
            });
        }

        if self.timeout_ms.is_none() {
            warn!("No request timeout configured; a hung model call blocks its request");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.credential_var, "API_KEY");
        assert_eq!(config.timeout_ms, None);
        assert_eq!(config.port, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_missing_endpoint() {
        let config = AppConfig {
            api_endpoint: "".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_missing_model() {
        let config = AppConfig {
            judge_model: "".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            judge_model: "judge-x".to_string(),
            timeout_ms: Some(1500),
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        assert_eq!(AppConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"port": 8080}"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.translator_model, DEFAULT_TRANSLATOR_MODEL);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("TRANSLATOR_MODEL", "env-translator");
        std::env::set_var("REQUEST_TIMEOUT_MS", "250");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.translator_model, "env-translator");
        assert_eq!(config.timeout_ms, Some(250));

        std::env::set_var("REQUEST_TIMEOUT_MS", "soon");
        assert!(AppConfig::from_env().is_err());

        std::env::remove_var("TRANSLATOR_MODEL");
        std::env::remove_var("REQUEST_TIMEOUT_MS");
    }
}
