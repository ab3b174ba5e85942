//! Target languages supported by translation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::contains_cjk;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported target language: {0} (expected ja or zh)")]
pub struct UnsupportedLanguage(pub String);

/// Translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    Japanese,
    Chinese,
}

impl TargetLanguage {
    /// English name as used in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Chinese => "Chinese",
        }
    }

    /// Pick the direction for `text`: CJK text goes to Chinese, anything else
    /// to Japanese.
    pub fn for_text(text: &str) -> Self {
        if contains_cjk(text) {
            TargetLanguage::Chinese
        } else {
            TargetLanguage::Japanese
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetLanguage {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(TargetLanguage::Japanese),
            "zh" | "cn" | "chinese" => Ok(TargetLanguage::Chinese),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("ja".parse(), Ok(TargetLanguage::Japanese));
        assert_eq!("Japanese".parse(), Ok(TargetLanguage::Japanese));
        assert_eq!(" CN ".parse(), Ok(TargetLanguage::Chinese));
        assert_eq!("chinese".parse(), Ok(TargetLanguage::Chinese));
        assert!("korean".parse::<TargetLanguage>().is_err());
    }

    #[test]
    fn test_for_text() {
        assert_eq!(TargetLanguage::for_text("ありがとう"), TargetLanguage::Chinese);
        assert_eq!(TargetLanguage::for_text("谢谢"), TargetLanguage::Chinese);
        assert_eq!(TargetLanguage::for_text("Thank you"), TargetLanguage::Japanese);
    }
}
