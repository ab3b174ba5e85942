//! Shared settings for the live-translate CLI and demos.
//! Read from the platform-specific config directory via `directories::ProjectDirs`.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Locale;
use crate::model::{ModelConfig, DEFAULT_BASE_URL, DEFAULT_MODEL_NAME};
use crate::retry::{RetryPolicy, DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_DELAY_MS, DEFAULT_MAX_RETRIES};

/// Application settings read from the config file and environment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Model API base URL
    pub base_url: String,
    /// Model API key
    pub api_key: String,
    /// Model name
    pub model_name: String,
    /// Maximum retries after the first attempt
    pub max_retries: u32,
    /// Base retry delay in milliseconds
    pub base_delay_ms: u64,
    /// Retry delay cap in milliseconds
    pub max_delay_ms: u64,
    /// Language tag for user-facing messages ("en", "zh", "ja")
    pub lang: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            lang: "en".to_string(),
        }
    }
}

impl AppSettings {
    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "moderras", "live-translate")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path.
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.json"))
    }

    /// Load settings from the config file, falling back to defaults.
    pub fn load() -> Self {
        Self::settings_path()
            .and_then(|path| fs::read_to_string(&path).ok())
            .map(|content| Self::from_json(&content))
            .unwrap_or_default()
    }

    /// Parse settings JSON, backfilling fields that older files lack or left blank.
    pub fn from_json(content: &str) -> Self {
        let defaults = Self::default();
        let mut loaded: Self = serde_json::from_str(content).unwrap_or_default();

        if loaded.base_url.is_empty() {
            loaded.base_url = defaults.base_url;
        }
        if loaded.model_name.is_empty() {
            loaded.model_name = defaults.model_name;
        }
        if loaded.lang.is_empty() {
            loaded.lang = defaults.lang;
        }

        loaded
    }

    /// Override fields from environment variables.
    ///
    /// `GEMINI_API_KEY` (or `API_KEY`), `MODEL_BASE_URL`, `MODEL_NAME`,
    /// `MODEL_MAX_RETRIES`, `MODEL_BASE_DELAY_MS`, `MODEL_MAX_DELAY_MS`, `APP_LANG`.
    /// Unparsable numbers are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = env::var("GEMINI_API_KEY").or_else(|_| env::var("API_KEY")) {
            self.api_key = key;
        }
        if let Ok(url) = env::var("MODEL_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(name) = env::var("MODEL_NAME") {
            self.model_name = name;
        }
        if let Some(n) = env::var("MODEL_MAX_RETRIES").ok().and_then(|s| s.parse().ok()) {
            self.max_retries = n;
        }
        if let Some(ms) = env::var("MODEL_BASE_DELAY_MS").ok().and_then(|s| s.parse().ok()) {
            self.base_delay_ms = ms;
        }
        if let Some(ms) = env::var("MODEL_MAX_DELAY_MS").ok().and_then(|s| s.parse().ok()) {
            self.max_delay_ms = ms;
        }
        if let Ok(lang) = env::var("APP_LANG") {
            self.lang = lang;
        }
        self
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::default()
            .with_base_url(&self.base_url)
            .with_api_key(&self.api_key)
            .with_model_name(&self.model_name)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_retries(self.max_retries)
            .with_base_delay(Duration::from_millis(self.base_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.lang)
    }
}
