//! Configuration module: prompts, locales and script detection.

mod detect;
mod i18n;
mod prompts;

pub use detect::contains_cjk;
pub use i18n::{get_messages, Locale, Messages, MESSAGES_EN, MESSAGES_JA, MESSAGES_ZH};
pub use prompts::{interpretation_prompt, translation_prompt, INTERPRETATION_PROMPT};
