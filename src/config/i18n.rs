//! Internationalization (i18n) of user-facing error messages.

use std::fmt;
use std::str::FromStr;

/// Display language for user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
}

impl Locale {
    /// Resolve a language tag such as `zh-CN`, `ja_JP` or `en`.
    ///
    /// Only the primary subtag is considered; unknown languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match primary.as_str() {
            "zh" | "cn" => Locale::Zh,
            "ja" | "jp" => Locale::Ja,
            _ => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Ja => "ja",
        }
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_tag(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error messages shown to end users.
#[derive(Debug, Clone)]
pub struct Messages {
    pub empty_translation_input: &'static str,
    pub empty_interpretation_input: &'static str,
    pub empty_translation_response: &'static str,
    pub empty_interpretation_response: &'static str,
    pub auth_config: &'static str,
    pub quota_exceeded: &'static str,
    pub network: &'static str,
    pub translation_unavailable: &'static str,
    pub interpretation_unavailable: &'static str,
}

/// English messages
pub static MESSAGES_EN: Messages = Messages {
    empty_translation_input: "Text to translate cannot be empty",
    empty_interpretation_input: "Text to interpret cannot be empty",
    empty_translation_response: "The translation service returned an empty result",
    empty_interpretation_response: "The interpretation service returned an empty result",
    auth_config: "API key configuration error",
    quota_exceeded: "API quota has been used up",
    network: "Network connection error",
    translation_unavailable: "Translation service is temporarily unavailable, please try again later",
    interpretation_unavailable:
        "Live interpretation service is temporarily unavailable, please try again later",
};

/// Chinese messages
pub static MESSAGES_ZH: Messages = Messages {
    empty_translation_input: "翻译文本不能为空",
    empty_interpretation_input: "解释文本不能为空",
    empty_translation_response: "翻译服务返回空结果",
    empty_interpretation_response: "解释服务返回空结果",
    auth_config: "API密钥配置错误",
    quota_exceeded: "API配额已用完",
    network: "网络连接错误",
    translation_unavailable: "翻译服务暂时不可用，请稍后重试",
    interpretation_unavailable: "实时解释服务暂时不可用，请稍后重试",
};

/// Japanese messages
pub static MESSAGES_JA: Messages = Messages {
    empty_translation_input: "翻訳するテキストを入力してください",
    empty_interpretation_input: "通訳するテキストを入力してください",
    empty_translation_response: "翻訳サービスから空の結果が返されました",
    empty_interpretation_response: "通訳サービスから空の結果が返されました",
    auth_config: "APIキーの設定に誤りがあります",
    quota_exceeded: "APIの利用上限に達しました",
    network: "ネットワーク接続エラー",
    translation_unavailable: "翻訳サービスは一時的に利用できません。しばらくしてから再試行してください",
    interpretation_unavailable:
        "リアルタイム通訳サービスは一時的に利用できません。しばらくしてから再試行してください",
};

/// Get messages for a locale.
pub fn get_messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::En => &MESSAGES_EN,
        Locale::Zh => &MESSAGES_ZH,
        Locale::Ja => &MESSAGES_JA,
    }
}
