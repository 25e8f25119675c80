//! Outbound model client
//!
//! One POST per call, no retries. Every outcome is classified into a
//! [`ModelResult`]; nothing here returns an error to the caller.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::AppConfig;
use crate::core::credential::{CredentialSource, EnvCredential};
use crate::core::errors::Result;
use crate::core::models::{ModelRequest, ModelResult};

/// A single model invocation
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send `prompt` to `model_name` and classify what came back
    async fn invoke(&self, model_name: &str, prompt: &str) -> ModelResult;

    /// [`Self::invoke`] projected to the plain string the page shows
    async fn call_llm(&self, model_name: &str, prompt: &str) -> String {
        self.invoke(model_name, prompt).await.to_string()
    }
}

/// HTTP gateway to the model-serving endpoint
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    endpoint: String,
    credential: Arc<dyn CredentialSource>,
}

impl LlmClient {
    /// Create a client for `config.api_endpoint` using the given credential source
    pub fn new(config: &AppConfig, credential: Arc<dyn CredentialSource>) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint.clone(),
            credential,
        })
    }

    /// Create a client whose credential is re-read from `config.credential_var` on every call
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let credential = Arc::new(EnvCredential::new(config.credential_var.clone()));
        Self::new(config, credential)
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send actual HTTP request
    async fn send_request(&self, api_key: &str, request: &ModelRequest) -> ModelResult {
        let response = match self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to model {} failed: {}", request.model_name, e);
                return ModelResult::NetworkError {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        debug!("Model {} answered with {}", request.model_name, status);

        if status == reqwest::StatusCode::OK {
            match response.json::<serde_json::Value>().await {
                Ok(json) => ModelResult::from_success_body(&json),
                Err(e) => {
                    warn!("Undecodable body from model {}: {}", request.model_name, e);
                    ModelResult::NetworkError {
                        message: e.to_string(),
                    }
                }
            }
        } else {
            let body = response.text().await.unwrap_or_default();
            ModelResult::HttpError {
                status: status.as_u16(),
                body,
            }
        }
    }
}

#[async_trait]
impl ModelGateway for LlmClient {
    async fn invoke(&self, model_name: &str, prompt: &str) -> ModelResult {
        let Some(api_key) = self.credential.credential() else {
            warn!("No API credential available, skipping call to {}", model_name);
            return ModelResult::MissingCredential;
        };

        let request = ModelRequest::new(model_name, prompt);
        let result = self.send_request(&api_key, &request).await;
        debug!("Model {} call classified as {}", model_name, result.kind());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credential::StaticCredential;

    #[test]
    fn test_client_creation() {
        let client = LlmClient::from_config(&AppConfig::default()).unwrap();
        assert_eq!(client.endpoint(), crate::core::config::DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = AppConfig {
            api_endpoint: String::new(),
            ..Default::default()
        };
        assert!(LlmClient::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        // unroutable endpoint: reaching it would yield a network error instead
        let config = AppConfig {
            api_endpoint: "http://127.0.0.1:9/never".to_string(),
            ..Default::default()
        };
        let client = LlmClient::new(&config, Arc::new(StaticCredential::none())).unwrap();

        let result = client.invoke("any_model", "any_prompt").await;
        assert_eq!(result, ModelResult::MissingCredential);
        assert_eq!(
            client.call_llm("any_model", "any_prompt").await,
            crate::core::models::MISSING_CREDENTIAL_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let config = AppConfig {
            api_endpoint: "http://127.0.0.1:9/never".to_string(),
            ..Default::default()
        };
        let client = LlmClient::new(&config, Arc::new(StaticCredential::new("k"))).unwrap();

        let result = client.invoke("any_model", "any_prompt").await;
        assert_eq!(result.kind(), "network_error");
        assert!(result.to_string().starts_with("Сетевая ошибка: "));
    }
}
