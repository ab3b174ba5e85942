//! Completion client for the Gemini `generateContent` REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for translation and interpretation.
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.5-flash";

/// Errors returned by a completion collaborator.
///
/// Variants carry structured codes where the provider gives them, so callers
/// can classify failures without looking at message text.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("completion returned no text")]
    EmptyText,
    #[error("{0}")]
    Other(String),
}

impl CompletionError {
    /// HTTP status reported by the provider, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            CompletionError::Api { status, .. } => Some(*status),
            CompletionError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// An external text-completion endpoint.
///
/// Takes a model identifier and a single prompt and returns the generated
/// text. An `Ok` with empty text is allowed; callers decide what that means.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError>;
}

/// Configuration for the AI model.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }
}

impl ModelConfig {
    /// Create a new ModelConfig with custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a new ModelConfig with custom API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Create a new ModelConfig with custom model name.
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Client for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    config: ModelConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new GeminiClient with the given configuration.
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn model_url(&self, model: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}/models/{}:generateContent", base, model)
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        })
    }

    /// Pull the first text part out of a response body. Missing candidates or
    /// parts yield an empty string.
    fn extract_text(response: GenerateContentResponse) -> String {
        response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let url = self.model_url(model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                } else {
                    message
                },
            });
        }

        // Error URLs carry the API key in the query string
        let raw = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.without_url()))?;
        debug!(status = status.as_u16(), bytes = raw.len(), "Received response from model");
        let body: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|e| CompletionError::ParseError(e.to_string()))?;

        Ok(Self::extract_text(body))
    }
}
