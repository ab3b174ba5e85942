//! Model client module for AI text completion.

mod client;

pub use client::{
    CompletionClient, CompletionError, GeminiClient, ModelConfig, DEFAULT_BASE_URL,
    DEFAULT_MODEL_NAME,
};
