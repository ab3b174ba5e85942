// Copyright 2025 ModerRAS
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Live Translate
//!
//! Chinese/Japanese translation and live-chat interpretation on top of a
//! generative AI text API.
//!
//! Every request goes through a bounded retry loop with linear backoff
//! (`min(base_delay * n, max_delay)`), and the last failure is classified
//! into a small set of user-facing error kinds.
//!
//! ## Example
//!
//! ```rust,no_run
//! use live_translate::{ModelConfig, RetryPolicy, TargetLanguage, TranslationService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let model = ModelConfig::default().with_api_key("YOUR_KEY");
//!     let service = TranslationService::gemini(model, RetryPolicy::default());
//!
//!     let text = service.translate("早上好", TargetLanguage::Japanese).await?;
//!     println!("{}", text);
//!
//!     let reply = service.interpret("こんにちは").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod model;
pub mod retry;
pub mod service;
pub mod settings;

pub use config::Locale;
pub use model::{CompletionClient, CompletionError, GeminiClient, ModelConfig};
pub use retry::{retry_with_backoff, RetryPolicy, RetryReport};
pub use service::{
    Operation, ServiceError, TargetLanguage, TranslationService, TranslatorConfig,
    UnsupportedLanguage,
};
pub use settings::AppSettings;
