//! Error types for backend calls

use serde::Deserialize;
use thiserror::Error;

/// Result type for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the gosearch backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed.
    #[error("Network error: {0}")]
    Network(String),

    /// The configured client-side timeout elapsed.
    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// The session is missing or expired (HTTP 401).
    #[error("Not authenticated")]
    Unauthorized(Option<String>),

    /// Any other non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http {
        status: u16,
        /// The `error` field of the response body, when the backend sent one.
        message: Option<String>,
    },

    /// The body was not parseable or not in the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Error body returned by the backend on failure
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        if status == 401 {
            return ApiError::Unauthorized(message);
        }
        ApiError::Http { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Message the backend attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } | ApiError::Unauthorized(message) => message.as_deref(),
            _ => None,
        }
    }

    /// True when no response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized() {
        let err = ApiError::from_status(401, r#"{"error":"login required"}"#);
        assert_eq!(err, ApiError::Unauthorized(Some("login required".into())));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_error_body_message_is_kept() {
        let err = ApiError::from_status(409, r#"{"error":"Username already exists"}"#);
        assert_eq!(err.server_message(), Some("Username already exists"));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unparseable_body_has_no_message() {
        let err = ApiError::from_status(500, "<html>Internal Server Error</html>");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_blank_error_field_is_ignored() {
        let err = ApiError::from_status(400, r#"{"error":"  "}"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_transport_errors() {
        assert!(ApiError::Network("offline".into()).is_transport());
        assert!(ApiError::Timeout(5000).is_transport());
        assert!(!ApiError::Decode("bad".into()).is_transport());
    }
}
