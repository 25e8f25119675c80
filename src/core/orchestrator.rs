//! Translate-then-judge pipeline

use std::sync::Arc;
use tracing::info;

use crate::core::client::ModelGateway;
use crate::core::config::AppConfig;
use crate::core::models::SubmissionResult;

/// Target language used when the form omits one
pub const DEFAULT_LANGUAGE: &str = "Английский";

/// Build the prompt asking for a translation
pub fn translation_prompt(language: &str, original_text: &str) -> String {
    format!("Переведи следующий текст на {}: {}", language, original_text)
}

/// Build the prompt asking the judge to grade a translation
pub fn evaluation_prompt(original_text: &str, translated: &str) -> String {
    format!(
        "Оцени качество перевода от 1 до 10 и аргументируй. Оригинал: '{}'. Перевод: '{}'.",
        original_text, translated
    )
}

/// Runs the two model calls for one submission
#[derive(Clone)]
pub struct Orchestrator {
    gateway: Arc<dyn ModelGateway>,
    translator_model: String,
    judge_model: String,
}

impl Orchestrator {
    /// Create an orchestrator calling `translator_model` then `judge_model`
    pub fn new(
        gateway: Arc<dyn ModelGateway>,
        translator_model: impl Into<String>,
        judge_model: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            translator_model: translator_model.into(),
            judge_model: judge_model.into(),
        }
    }

    /// Use the models named in `config`
    pub fn from_config(gateway: Arc<dyn ModelGateway>, config: &AppConfig) -> Self {
        Self::new(gateway, &config.translator_model, &config.judge_model)
    }

    /// Translate `original_text`, then have the judge grade the result.
    ///
    /// Never fails. Whatever string the first call produced, error text
    /// included, is fed into the evaluation prompt as the translation.
    pub async fn run(&self, original_text: &str, language: &str) -> SubmissionResult {
        info!(
            "Translating {} chars into {} with {}",
            original_text.chars().count(),
            language,
            self.translator_model
        );

        let translated = self
            .gateway
            .call_llm(&self.translator_model, &translation_prompt(language, original_text))
            .await;

        let evaluation = self
            .gateway
            .call_llm(&self.judge_model, &evaluation_prompt(original_text, &translated))
            .await;

        SubmissionResult {
            original: original_text.to_string(),
            translated,
            evaluation,
            language: language.to_string(),
        }
    }

    /// [`Self::run`] with form-style defaults for absent fields
    pub async fn run_submission(
        &self,
        text: Option<String>,
        language: Option<String>,
    ) -> SubmissionResult {
        let text = text.unwrap_or_default();
        let language = language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        self.run(&text, &language).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ModelResult, MISSING_CREDENTIAL_MESSAGE};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned results and records every call
    struct ScriptedGateway {
        replies: Mutex<VecDeque<ModelResult>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedGateway {
        fn new(replies: Vec<ModelResult>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelGateway for ScriptedGateway {
        async fn invoke(&self, model_name: &str, prompt: &str) -> ModelResult {
            self.calls
                .lock()
                .unwrap()
                .push((model_name.to_string(), prompt.to_string()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ModelResult::Text(String::new()))
        }
    }

    fn text(s: &str) -> ModelResult {
        ModelResult::Text(s.to_string())
    }

    #[tokio::test]
    async fn test_happy_path() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            text("Bonjour le monde"),
            text("9/10, accurate"),
        ]));
        let orchestrator = Orchestrator::new(gateway.clone(), "worker", "judge");

        let result = orchestrator.run("Hello world", "French").await;

        assert_eq!(
            result,
            SubmissionResult {
                original: "Hello world".to_string(),
                translated: "Bonjour le monde".to_string(),
                evaluation: "9/10, accurate".to_string(),
                language: "French".to_string(),
            }
        );

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "worker");
        assert_eq!(calls[0].1, "Переведи следующий текст на French: Hello world");
        assert_eq!(calls[1].0, "judge");
        assert_eq!(
            calls[1].1,
            "Оцени качество перевода от 1 до 10 и аргументируй. Оригинал: 'Hello world'. Перевод: 'Bonjour le monde'."
        );
    }

    #[tokio::test]
    async fn test_error_flows_into_evaluation_prompt() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            ModelResult::HttpError {
                status: 500,
                body: "Internal Server Error".to_string(),
            },
            text("1/10"),
        ]));
        let orchestrator = Orchestrator::new(gateway.clone(), "worker", "judge");

        let result = orchestrator.run("Test text", "Русский").await;

        assert!(result.translated.contains("500"));
        assert!(result.translated.contains("Internal Server Error"));
        assert_eq!(result.evaluation, "1/10");

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].1.contains(&result.translated));
    }

    #[tokio::test]
    async fn test_missing_credential_on_both_calls() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            ModelResult::MissingCredential,
            ModelResult::MissingCredential,
        ]));
        let orchestrator = Orchestrator::new(gateway, "worker", "judge");

        let result = orchestrator.run("Hello", "French").await;
        assert_eq!(result.translated, MISSING_CREDENTIAL_MESSAGE);
        assert_eq!(result.evaluation, MISSING_CREDENTIAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_absent_fields_use_defaults() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let orchestrator = Orchestrator::new(gateway.clone(), "worker", "judge");

        let result = orchestrator.run_submission(None, None).await;

        assert_eq!(result.original, "");
        assert_eq!(result.language, DEFAULT_LANGUAGE);
        assert_eq!(result.translated, "");
        assert_eq!(result.evaluation, "");
        assert_eq!(gateway.calls()[0].1, "Переведи следующий текст на Английский: ");
    }

    #[tokio::test]
    async fn test_empty_language_is_kept() {
        let gateway = Arc::new(ScriptedGateway::new(vec![text("a"), text("b")]));
        let orchestrator = Orchestrator::new(gateway, "worker", "judge");

        let result = orchestrator
            .run_submission(Some("Hello".to_string()), Some(String::new()))
            .await;
        assert_eq!(result.language, "");
    }

    #[tokio::test]
    async fn test_prompt_is_not_sanitized() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let orchestrator = Orchestrator::new(gateway.clone(), "worker", "judge");
        let payload = "'; DROP TABLE users; --\n<script>alert(1)</script>\u{0007}";

        orchestrator.run(payload, "Русский").await;

        let calls = gateway.calls();
        assert!(calls[0].1.ends_with(payload));
        assert!(calls[1].1.contains(payload));
    }
}
