use crate::domain::model::PatentNumber;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatentError {
    #[error("Patent {number} not found")]
    NotFound { number: PatentNumber },

    #[error("Malformed patent number '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    #[error("Patent registry unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected registry payload: {message}")]
    UnexpectedPayload { message: String },

    #[error("Invalid date: '{value}'")]
    InvalidDate { value: String },

    #[error("Date out of range: {date} ({reason})")]
    DateOutOfRange { date: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl PatentError {
    /// 可以轉換成使用者訊息的錯誤 (查無專利、輸入格式錯誤)
    pub fn is_business_failure(&self) -> bool {
        matches!(
            self,
            PatentError::NotFound { .. } | PatentError::MalformedInput { .. }
        )
    }

    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            PatentError::UpstreamUnavailable { .. }
                | PatentError::ApiError(_)
                | PatentError::UnexpectedPayload { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PatentError::NotFound { .. }
            | PatentError::MalformedInput { .. }
            | PatentError::ConfigValidationError { .. }
            | PatentError::InvalidConfigValueError { .. }
            | PatentError::MissingConfigError { .. } => 1,
            e if e.is_upstream_failure() => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_failures_are_classified() {
        let not_found = PatentError::NotFound {
            number: PatentNumber::new(9_999_999).unwrap(),
        };
        assert!(not_found.is_business_failure());
        assert!(!not_found.is_upstream_failure());

        let upstream = PatentError::UpstreamUnavailable {
            message: "connection refused".to_string(),
        };
        assert!(!upstream.is_business_failure());
        assert!(upstream.is_upstream_failure());
    }

    #[test]
    fn test_exit_codes() {
        let upstream = PatentError::UpstreamUnavailable {
            message: "timeout".to_string(),
        };
        assert_eq!(upstream.exit_code(), 2);

        let config = PatentError::MissingConfigError {
            field: "source.endpoint".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let date = PatentError::InvalidDate {
            value: "yesterday".to_string(),
        };
        assert_eq!(date.exit_code(), 3);
    }
}
