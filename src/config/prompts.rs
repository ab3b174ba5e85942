//! Prompt templates for translation and live interpretation.

/// Instruction used for live-chat interpretation. The text is appended in quotes.
pub static INTERPRETATION_PROMPT: &str = "You are a simultaneous interpreter for a live chat. \
If the following text is in Chinese, translate it to Japanese and prefix with (JP):. \
If it is in Japanese, translate it to Chinese and prefix with (CN):. \
If it's in another language like English, translate to both, like (JP): [Japanese translation] (CN): [Chinese translation]. \
Keep the translation natural and concise for a live chat.";

/// Build the prompt for translating `text` into `language`.
///
/// # Arguments
/// * `text` - Text to translate, embedded verbatim.
/// * `language` - English name of the target language, e.g. "Japanese".
pub fn translation_prompt(text: &str, language: &str) -> String {
    format!("Translate the following text to {}: \"{}\"", language, text)
}

/// Build the prompt for interpreting a live-chat message.
pub fn interpretation_prompt(text: &str) -> String {
    format!("{} Text: \"{}\"", INTERPRETATION_PROMPT, text)
}
