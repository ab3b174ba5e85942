//! Script detection used to pick a translation direction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Han ideographs, Hiragana and Katakana (including the long vowel mark).
static CJK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[一-龠]|[ぁ-ゔ]|[ァ-ヴー]").expect("valid CJK pattern"));

/// Whether `text` contains any Han or kana character.
///
/// Chinese and Japanese share Han characters, so this can only tell
/// "CJK text" from "other text". Feed and comment translation use it to
/// send CJK text to Chinese and everything else to Japanese.
pub fn contains_cjk(text: &str) -> bool {
    CJK_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("今日はいい天気ですね"));
        assert!(contains_cjk("カタカナ"));
        assert!(contains_cjk("我们走吧"));
        assert!(contains_cjk("mixed テキスト"));
    }

    #[test]
    fn test_no_cjk() {
        assert!(!contains_cjk("Good morning"));
        assert!(!contains_cjk("안녕하세요"));
        assert!(!contains_cjk(""));
    }
}
