//! Core data models for model calls and submissions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when no credential is available
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Ошибка: API ключ не найден в переменных окружения.";

/// Shown when a 200 body has no `response` field
pub const FIELD_MISSING_MESSAGE: &str = "Ответ не найден в JSON.";

/// Outbound request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRequest {
    /// Opaque model identifier, not validated
    pub model_name: String,
    /// Full prompt text
    pub prompt: String,
}

impl ModelRequest {
    /// Pair a model identifier with a prompt
    pub fn new(model_name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            prompt: prompt.into(),
        }
    }
}

/// Classified outcome of one outbound call.
///
/// The [`fmt::Display`] impl is the lossy projection every caller sees:
/// successes and failures both become plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelResult {
    /// The `response` field of a 200 body, untouched
    Text(String),
    /// 200 body without a `response` field
    FieldMissing,
    /// No credential configured; nothing was sent
    MissingCredential,
    /// Any non-200 status
    HttpError {
        /// Status code as received
        status: u16,
        /// Raw response body
        body: String,
    },
    /// Connection, DNS, TLS or body decoding failure
    NetworkError {
        /// Transport error description
        message: String,
    },
}

impl ModelResult {
    /// Classify a decoded 200 body
    pub fn from_success_body(json: &serde_json::Value) -> Self {
        match json.get("response") {
            Some(serde_json::Value::String(text)) => ModelResult::Text(text.clone()),
            Some(other) => ModelResult::Text(other.to_string()),
            None => ModelResult::FieldMissing,
        }
    }

    /// Short tag name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ModelResult::Text(_) => "text",
            ModelResult::FieldMissing => "field_missing",
            ModelResult::MissingCredential => "missing_credential",
            ModelResult::HttpError { .. } => "http_error",
            ModelResult::NetworkError { .. } => "network_error",
        }
    }
}

impl fmt::Display for ModelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelResult::Text(text) => f.write_str(text),
            ModelResult::FieldMissing => f.write_str(FIELD_MISSING_MESSAGE),
            ModelResult::MissingCredential => f.write_str(MISSING_CREDENTIAL_MESSAGE),
            ModelResult::HttpError { status, body } => write!(f, "Ошибка API: {} - {}", status, body),
            ModelResult::NetworkError { message } => write!(f, "Сетевая ошибка: {}", message),
        }
    }
}

/// Everything the page needs after one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Submitted text
    pub original: String,
    /// First model's output, or the error string in its place
    pub translated: String,
    /// Judge's output, or the error string in its place
    pub evaluation: String,
    /// Requested target language
    pub language: String,
}
