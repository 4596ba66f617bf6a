//! API client errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session expired while calling {path}")]
    SessionExpired { path: String },

    #[error("invalid credentials{}", suffix(.message))]
    InvalidCredentials { message: Option<String> },

    #[error("server returned {status}{}", suffix(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

fn suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_and_without_message() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: Some("API key not found".to_string()),
        };
        assert_eq!(err.to_string(), "server returned 404 Not Found: API key not found");

        let err = ApiError::InvalidCredentials { message: None };
        assert_eq!(err.to_string(), "invalid credentials");
    }
}
