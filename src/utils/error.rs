use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Missing required flags: -token and -domain")]
    UsageError { help: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to build request: {message}")]
    RequestBuildError { message: String },

    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    BodyReadError(#[source] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Serialization error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("No metrics returned for {domain}")]
    EmptyResultError { domain: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Configuration,
    Network,
    Api,
    Data,
    System,
}

impl MetricsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MetricsError::UsageError { .. } => ErrorCategory::Usage,
            MetricsError::InvalidConfigValueError { .. }
            | MetricsError::RequestBuildError { .. } => ErrorCategory::Configuration,
            MetricsError::TransportError(_) | MetricsError::BodyReadError(_) => {
                ErrorCategory::Network
            }
            MetricsError::ApiError { .. } => ErrorCategory::Api,
            MetricsError::DecodeError(_) | MetricsError::EmptyResultError { .. } => {
                ErrorCategory::Data
            }
            MetricsError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Only transport failures are retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MetricsError::TransportError(_))
    }

    pub fn exit_code(&self) -> i32 {
        1
    }

    /// 給使用者看的俄文訊息，與報表語言一致
    pub fn user_friendly_message(&self) -> String {
        match self {
            MetricsError::UsageError { help } => {
                format!("Ошибка: Необходимо указать -token и -domain.\n{}", help)
            }
            MetricsError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!(
                "Ошибка: некорректное значение параметра {} ({}): {}",
                field, value, reason
            ),
            MetricsError::RequestBuildError { message } => {
                format!("Ошибка при создании запроса: {}", message)
            }
            MetricsError::TransportError(e) => {
                format!("Ошибка при выполнении запроса: {}", e)
            }
            MetricsError::BodyReadError(e) => format!("Ошибка при чтении ответа: {}", e),
            MetricsError::ApiError { status, body } => {
                format!("Ошибка от Ahrefs API (Статус: {}): {}", status, body)
            }
            MetricsError::DecodeError(e) => format!("Ошибка при парсинге JSON: {}", e),
            MetricsError::EmptyResultError { .. } => {
                "Не удалось получить метрики для указанного домена.".to_string()
            }
            MetricsError::IoError(e) => format!("Ошибка ввода-вывода: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = MetricsError::ApiError {
            status: 401,
            body: r#"{"error":"unauthorized"}"#.to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("401"));
        assert!(message.contains(r#"{"error":"unauthorized"}"#));
        assert_eq!(err.category(), ErrorCategory::Api);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            MetricsError::UsageError {
                help: String::new(),
            },
            MetricsError::RequestBuildError {
                message: "bad".to_string(),
            },
            MetricsError::EmptyResultError {
                domain: "example.com".to_string(),
            },
            MetricsError::DecodeError(serde_json::from_str::<u8>("{").unwrap_err()),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_usage_message_lists_help() {
        let err = MetricsError::UsageError {
            help: "  --token <TOKEN>".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.starts_with("Ошибка: Необходимо указать -token и -domain."));
        assert!(message.contains("--token <TOKEN>"));
        assert_eq!(err.category(), ErrorCategory::Usage);
    }
}
