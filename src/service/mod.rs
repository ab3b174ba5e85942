//! Translation service module.

mod error;
mod language;
mod translator;

pub use error::{Operation, ServiceError};
pub use language::{TargetLanguage, UnsupportedLanguage};
pub use translator::{TranslationService, TranslatorConfig};
