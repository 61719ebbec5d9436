//! HTTP error classification and normalization
//!
//! Normalizes backend error responses into a uniform error format

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classification of HTTP errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClassification {
    /// Client errors (4xx)
    ClientError,
    /// Server errors (5xx)
    ServerError,
    /// Network errors (timeouts, connection failures)
    NetworkError,
    /// Rate limiting (429)
    RateLimitError,
    /// Authentication errors (401/403)
    AuthenticationError,
    /// Unknown errors
    Unknown,
}

impl ErrorClassification {
    /// Whether a caller could reasonably retry a request that failed this way.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorClassification::ServerError
                | ErrorClassification::NetworkError
                | ErrorClassification::RateLimitError
        )
    }
}

/// Normalized HTTP error representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
    /// HTTP status code if available
    pub status_code: Option<u16>,
    /// Error classification
    pub classification: ErrorClassification,
    /// Human-readable error message
    pub message: String,
    /// Parsed error response body, if it was JSON
    pub details: Option<Value>,
    /// Retry-After header value if present
    pub retry_after: Option<u64>,
}

impl HttpError {
    /// Create from a reqwest Response with a non-success status
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let status_code = Some(status.as_u16());

        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());

        let body = response.text().await.unwrap_or_default();
        let details = serde_json::from_str::<Value>(&body).ok();
        let message = Self::extract_message(&details, &body, status);
        let classification = Self::classify_status(status);

        Self {
            status_code,
            classification,
            message,
            details,
            retry_after,
        }
    }

    /// Create from a network/request error
    pub fn from_request_error(error: reqwest::Error) -> Self {
        let classification = if error.is_timeout() || error.is_connect() {
            ErrorClassification::NetworkError
        } else {
            ErrorClassification::Unknown
        };

        Self {
            status_code: None,
            classification,
            message: error.to_string(),
            details: None,
            retry_after: None,
        }
    }

    /// Classify an HTTP status code
    pub fn classify_status(status: StatusCode) -> ErrorClassification {
        match status.as_u16() {
            401 | 403 => ErrorClassification::AuthenticationError,
            429 => ErrorClassification::RateLimitError,
            400..=499 => ErrorClassification::ClientError,
            500..=599 => ErrorClassification::ServerError,
            _ => ErrorClassification::Unknown,
        }
    }

    /// Pull a human-readable message out of the error body.
    ///
    /// Accepts the common `{"message": ...}` and `{"error": {"message": ...}}`
    /// shapes; otherwise falls back to the raw body or the status line.
    fn extract_message(details: &Option<Value>, body: &str, status: StatusCode) -> String {
        if let Some(json) = details {
            if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
            if let Some(message) = json
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                return message.to_string();
            }
        }
        if body.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            body.to_string()
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "HTTP {}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for HttpError {}

impl From<HttpError> for crate::Error {
    fn from(err: HttpError) -> Self {
        crate::Error::Http {
            message: err.to_string(),
            status_code: err.status_code,
            source: Some(anyhow::anyhow!(err)),
        }
    }
}
