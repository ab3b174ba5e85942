//! Translation and live interpretation over a retrying completion call.

use futures::future::join_all;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use super::error::{Operation, ServiceError};
use super::language::TargetLanguage;
use crate::config::{interpretation_prompt, translation_prompt};
use crate::model::{CompletionClient, CompletionError, GeminiClient, ModelConfig, DEFAULT_MODEL_NAME};
use crate::retry::{retry_with_backoff, RetryPolicy};

/// Configuration for the translation service.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Model identifier passed to the completion client.
    pub model_name: String,
    /// Retry policy applied to every request.
    pub retry: RetryPolicy,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl TranslatorConfig {
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// Translates and interprets text through a [`CompletionClient`], retrying
/// failed calls and classifying the final failure.
///
/// Calls share no mutable state, so one service can serve many concurrent
/// requests.
pub struct TranslationService<C> {
    client: C,
    config: TranslatorConfig,
}

impl TranslationService<GeminiClient> {
    /// Build a service backed by the Gemini REST API.
    pub fn gemini(model: ModelConfig, retry: RetryPolicy) -> Self {
        let config = TranslatorConfig::default()
            .with_model_name(model.model_name.clone())
            .with_retry(retry);
        Self::new(GeminiClient::new(model), config)
    }
}

impl<C: CompletionClient> TranslationService<C> {
    pub fn new(client: C, config: TranslatorConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate `text` into `target`.
    ///
    /// # Errors
    /// [`ServiceError::EmptyInput`] without contacting the model if `text` is
    /// blank; otherwise a classified error once retries are exhausted.
    pub async fn translate(
        &self,
        text: &str,
        target: TargetLanguage,
    ) -> Result<String, ServiceError> {
        self.execute(Operation::Translate, text, || {
            translation_prompt(text, target.name())
        })
        .await
    }

    /// Interpret a live-chat message between Chinese and Japanese.
    ///
    /// The reply is tagged with `(JP):` and/or `(CN):` depending on the
    /// detected source language.
    pub async fn interpret(&self, text: &str) -> Result<String, ServiceError> {
        self.execute(Operation::Interpret, text, || interpretation_prompt(text))
            .await
    }

    /// Translate `text`, picking the target from its script.
    pub async fn translate_auto(&self, text: &str) -> Result<String, ServiceError> {
        self.translate(text, TargetLanguage::for_text(text)).await
    }

    /// Translate several texts concurrently. Results keep the input order.
    pub async fn translate_many<I>(
        &self,
        texts: I,
        target: TargetLanguage,
    ) -> Vec<Result<String, ServiceError>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        join_all(
            texts
                .into_iter()
                .map(|text| async move { self.translate(text.as_ref(), target).await }),
        )
        .await
    }

    async fn execute(
        &self,
        operation: Operation,
        text: &str,
        build_prompt: impl FnOnce() -> String,
    ) -> Result<String, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::EmptyInput { operation });
        }

        let prompt = build_prompt();
        let span = info_span!("completion", request_id = %Uuid::new_v4(), %operation);

        async {
            info!(
                model = self.config.model_name.as_str(),
                chars = text.chars().count(),
                "Sending {} request",
                operation
            );

            let client = &self.client;
            let model = self.config.model_name.as_str();
            let prompt = prompt.as_str();

            let (result, report) = retry_with_backoff(&self.config.retry, move || async move {
                match client.complete(model, prompt).await {
                    Ok(text) if text.trim().is_empty() => Err(CompletionError::EmptyText),
                    other => other,
                }
            })
            .await;

            match result {
                Ok(reply) => {
                    info!(
                        attempts = report.attempts,
                        total_delay_ms = report.total_delay.as_millis() as u64,
                        "{} completed",
                        operation
                    );
                    Ok(reply)
                }
                Err(e) => {
                    let classified = ServiceError::classify(operation, &e);
                    error!(
                        attempts = report.attempts,
                        total_delay_ms = report.total_delay.as_millis() as u64,
                        error = %e,
                        "{} failed: {}",
                        operation,
                        classified
                    );
                    Err(classified)
                }
            }
        }
        .instrument(span)
        .await
    }
}
