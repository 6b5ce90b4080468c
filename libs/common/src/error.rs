//! Custom error types for the common library
//!
//! This module defines the error taxonomy shared by all Vidora client crates.
//! Callers distinguish transport-level failures from HTTP-level failures by
//! the presence of a status code on the error.

use thiserror::Error;

/// Custom error type for Vidora API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server rejected the session (HTTP 401). The client has already
    /// cleared the persisted token when this is returned.
    #[error("Unauthorized. Please log in.")]
    Unauthorized,

    /// Any other non-2xx HTTP response
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// Transport-level failure, no response was received
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input rejected locally, before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request was cancelled by the caller
    #[error("Request cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server responded at all.
    ///
    /// Returns `None` for network, decode, validation, cancellation and
    /// configuration errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was produced without any response from the server
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Type alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_carries_the_401_status() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert!(ApiError::Unauthorized.to_string().contains("Unauthorized"));
    }

    #[test]
    fn http_errors_expose_their_status() {
        let err = ApiError::Http {
            status: 422,
            message: "Unprocessable Entity".to_string(),
            body: None,
        };
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_transport());
    }

    #[test]
    fn local_errors_have_no_status() {
        assert_eq!(ApiError::Validation("bad input".to_string()).status(), None);
        assert_eq!(ApiError::Cancelled.status(), None);
        assert_eq!(ApiError::Decode("not json".to_string()).status(), None);
    }
}
