//! Client error types

use thiserror::Error;

/// Failure to read from a credential store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store does not exist in this environment
    #[error("Token store unavailable: {0}")]
    Unavailable(String),

    /// The store exists but refused the read
    #[error("Token store access failed: {0}")]
    Access(String),
}

/// Failure raised by a request interceptor
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterceptError {
    /// Looking up the credential failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A header value could not be constructed
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The interception pipeline rejected the request before it was sent
    #[error("Request interception failed: {0}")]
    Interceptor(#[from] InterceptError),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the request never left the client because interception failed
    #[must_use]
    pub const fn is_interceptor_failure(&self) -> bool {
        matches!(self, Self::Interceptor(_))
    }
}
