//! Classified errors surfaced to callers of the translation service.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::{get_messages, Locale};
use crate::model::CompletionError;

static AUTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)api[_ ]?key").expect("valid API key pattern"));
static QUOTA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)quota").expect("valid quota pattern"));
static NETWORK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)network").expect("valid network pattern"));

/// Which service operation produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Translate,
    Interpret,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Translate => f.write_str("translation"),
            Operation::Interpret => f.write_str("interpretation"),
        }
    }
}

/// Errors returned by [`TranslationService`](super::TranslationService).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input was empty or whitespace only. Never retried.
    #[error("{operation} text must not be empty")]
    EmptyInput { operation: Operation },
    /// The model kept answering without usable text.
    #[error("{operation} service returned an empty result")]
    EmptyResponse { operation: Operation },
    /// Missing or invalid credential.
    #[error("API key configuration error: {detail}")]
    AuthConfig { detail: String },
    /// Rate limit or quota signal from the provider.
    #[error("API quota exceeded: {detail}")]
    QuotaExceeded { detail: String },
    /// Transport-level failure.
    #[error("network connection error: {detail}")]
    Network { detail: String },
    /// Anything else, after retries were exhausted.
    #[error("{operation} service temporarily unavailable: {detail}")]
    ServiceUnavailable { operation: Operation, detail: String },
}

impl ServiceError {
    /// Classify the last failure of an exhausted retry loop.
    ///
    /// Structured codes from the collaborator win. Message matching on the
    /// error text is only a fallback and can misfire on unrelated messages
    /// that happen to mention a key, a quota or the network.
    pub fn classify(operation: Operation, error: &CompletionError) -> Self {
        let detail = error.to_string();

        if let CompletionError::EmptyText = error {
            return ServiceError::EmptyResponse { operation };
        }

        match error.status() {
            Some(401) | Some(403) => return ServiceError::AuthConfig { detail },
            Some(429) => return ServiceError::QuotaExceeded { detail },
            _ => {}
        }

        if let CompletionError::Transport(e) = error {
            if e.is_connect() || e.is_timeout() || e.is_request() {
                return ServiceError::Network { detail };
            }
        }

        if AUTH_PATTERN.is_match(&detail) {
            ServiceError::AuthConfig { detail }
        } else if QUOTA_PATTERN.is_match(&detail) {
            ServiceError::QuotaExceeded { detail }
        } else if NETWORK_PATTERN.is_match(&detail) {
            ServiceError::Network { detail }
        } else {
            ServiceError::ServiceUnavailable { operation, detail }
        }
    }

    /// Localized message suitable for showing to an end user.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        let messages = get_messages(locale);
        match self {
            ServiceError::EmptyInput {
                operation: Operation::Translate,
            } => messages.empty_translation_input,
            ServiceError::EmptyInput {
                operation: Operation::Interpret,
            } => messages.empty_interpretation_input,
            ServiceError::EmptyResponse {
                operation: Operation::Translate,
            } => messages.empty_translation_response,
            ServiceError::EmptyResponse {
                operation: Operation::Interpret,
            } => messages.empty_interpretation_response,
            ServiceError::AuthConfig { .. } => messages.auth_config,
            ServiceError::QuotaExceeded { .. } => messages.quota_exceeded,
            ServiceError::Network { .. } => messages.network,
            ServiceError::ServiceUnavailable {
                operation: Operation::Translate,
                ..
            } => messages.translation_unavailable,
            ServiceError::ServiceUnavailable {
                operation: Operation::Interpret,
                ..
            } => messages.interpretation_unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> CompletionError {
        CompletionError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_classify_structured_status() {
        assert!(matches!(
            ServiceError::classify(Operation::Translate, &api(401, "unauthenticated")),
            ServiceError::AuthConfig { .. }
        ));
        assert!(matches!(
            ServiceError::classify(Operation::Translate, &api(403, "forbidden")),
            ServiceError::AuthConfig { .. }
        ));
        assert!(matches!(
            ServiceError::classify(Operation::Interpret, &api(429, "slow down")),
            ServiceError::QuotaExceeded { .. }
        ));
    }

    #[test]
    fn test_classify_empty_text() {
        assert_eq!(
            ServiceError::classify(Operation::Interpret, &CompletionError::EmptyText),
            ServiceError::EmptyResponse {
                operation: Operation::Interpret
            }
        );
    }

    #[test]
    fn test_classify_message_fallback() {
        let invalid_key = api(400, "API key not valid. Please pass a valid API key. [API_KEY_INVALID]");
        assert!(matches!(
            ServiceError::classify(Operation::Translate, &invalid_key),
            ServiceError::AuthConfig { .. }
        ));

        let quota = CompletionError::Other("You exceeded your current quota".to_string());
        assert!(matches!(
            ServiceError::classify(Operation::Translate, &quota),
            ServiceError::QuotaExceeded { .. }
        ));

        let network = CompletionError::Other("network timeout".to_string());
        assert_eq!(
            ServiceError::classify(Operation::Translate, &network),
            ServiceError::Network {
                detail: "network timeout".to_string()
            }
        );
    }

    #[test]
    fn test_classify_parse_error_is_unavailable() {
        let err = CompletionError::ParseError("expected value at line 1 column 1".to_string());
        assert!(matches!(
            ServiceError::classify(Operation::Translate, &err),
            ServiceError::ServiceUnavailable {
                operation: Operation::Translate,
                ..
            }
        ));
    }

    #[test]
    fn test_classify_unmatched_is_unavailable() {
        let err = ServiceError::classify(Operation::Interpret, &api(500, "internal error"));
        assert_eq!(
            err,
            ServiceError::ServiceUnavailable {
                operation: Operation::Interpret,
                detail: "API error (500): internal error".to_string()
            }
        );

        let timeout = CompletionError::Other("deadline exceeded".to_string());
        assert!(matches!(
            ServiceError::classify(Operation::Translate, &timeout),
            ServiceError::ServiceUnavailable { .. }
        ));
    }

    #[test]
    fn test_user_message() {
        let err = ServiceError::ServiceUnavailable {
            operation: Operation::Translate,
            detail: String::new(),
        };
        assert_eq!(err.user_message(Locale::Zh), "翻译服务暂时不可用，请稍后重试");

        let err = ServiceError::ServiceUnavailable {
            operation: Operation::Interpret,
            detail: String::new(),
        };
        assert_eq!(err.user_message(Locale::Zh), "实时解释服务暂时不可用，请稍后重试");

        let err = ServiceError::EmptyInput {
            operation: Operation::Interpret,
        };
        assert_eq!(err.user_message(Locale::En), "Text to interpret cannot be empty");

        let err = ServiceError::QuotaExceeded {
            detail: String::new(),
        };
        assert_eq!(err.user_message(Locale::Ja), "APIの利用上限に達しました");
    }
}
