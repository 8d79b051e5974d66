//! Error taxonomy for API calls.
//!
//! Every failure a request can produce is surfaced as a single [`ApiError`]:
//!
//! - transport failures (the request never produced a response),
//! - HTTP error statuses, carrying the status, a human message and the raw body,
//! - client-initiated cancellation,
//! - client-side preparation problems (bad URL, missing path parameter, body
//!   of the wrong media type, encoding).
//!
//! The request layer never recovers from any of these; callers decide how to
//! present them.

use serde_json::Value;

/// Convenience alias for results of API calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: u16,
        status_text: String,
        message: String,
        /// Raw response body, parsed as JSON when possible.
        body: Value,
        method: String,
        url: String,
    },

    /// The request never reached the server or no response was received.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The call was cancelled before it settled.
    #[error("Request aborted")]
    Cancelled,

    #[error("Missing path parameter `{0}`")]
    MissingPathParam(String),

    /// The request body does not match the media type the endpoint declares.
    #[error("{endpoint} expects {expected}, got {actual}")]
    MediaTypeMismatch {
        endpoint: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A token or header provider failed.
    #[error("Failed to resolve request credentials: {0}")]
    Provider(String),
}

impl ApiError {
    pub fn transport<E: std::fmt::Display>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn provider<E: std::fmt::Display>(err: E) -> Self {
        Self::Provider(err.to_string())
    }

    /// HTTP status of the failed response, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of the failed response, if the server answered.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The backend signals an expired or missing session with 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status_error(status: u16, message: &str) -> ApiError {
        ApiError::Status {
            status,
            status_text: "Forbidden".into(),
            message: message.into(),
            body: json!({}),
            method: "GET".into(),
            url: "http://localhost:3001/api/languages".into(),
        }
    }

    #[test]
    fn test_status_error_displays_message_only() {
        let err = status_error(403, "Access denied");
        assert_eq!(err.to_string(), "Access denied");
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.body(), Some(&json!({})));
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        assert_eq!(ApiError::Cancelled.status(), None);
        assert_eq!(ApiError::transport("connection refused").status(), None);
        assert!(ApiError::Cancelled.body().is_none());
    }

    #[test]
    fn test_cancelled_is_distinct() {
        assert!(ApiError::Cancelled.is_cancelled());
        assert!(!ApiError::transport("reset").is_cancelled());
        assert!(!status_error(499, "Client closed").is_cancelled());
    }

    #[test]
    fn test_unauthorized_and_not_found() {
        assert!(status_error(401, "Unauthorized").is_unauthorized());
        assert!(!status_error(403, "Forbidden").is_unauthorized());
        assert!(status_error(404, "Language not found").is_not_found());
    }

    #[test]
    fn test_transport_message() {
        let err = ApiError::transport("dns error");
        assert_eq!(err.to_string(), "Request failed: dns error");
    }
}
