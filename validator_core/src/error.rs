//! Validator error types and handling

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValidatorError>;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("request to {url} timed out after {timeout_ms}ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Assertion(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ValidatorError {
    /// Classifies a `reqwest::Error` for a given probe target. Timeouts keep
    /// the configured budget in the message so reports stay actionable.
    pub fn from_probe(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ValidatorError::Timeout {
                url: url.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            }
        } else {
            ValidatorError::Transport(err.to_string())
        }
    }

    pub fn assertion(msg: impl Into<String>) -> Self {
        ValidatorError::Assertion(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_carries_budget() {
        let err = ValidatorError::Timeout {
            url: "http://localhost:8000/health".to_string(),
            timeout_ms: 5000,
        };
        let msg = err.to_string();
        assert!(msg.contains("http://localhost:8000/health"));
        assert!(msg.contains("5000ms"));
    }

    #[test]
    fn test_assertion_message_is_verbatim() {
        let err = ValidatorError::assertion("expected status \"healthy\", got \"degraded\"");
        assert_eq!(
            err.to_string(),
            "expected status \"healthy\", got \"degraded\""
        );
    }

    #[test]
    fn test_http_status_message() {
        let err = ValidatorError::HttpStatus {
            url: "http://localhost:8000/api/countries".to_string(),
            status: 503,
        };
        assert!(err.to_string().contains("HTTP 503"));
    }
}
