//! Error types for API requests.

use thiserror::Error;

/// Errors that can occur while talking to the EveryTip API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request URL or parameters are invalid
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to reach the server
    #[error("Connection failed to '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Server answered with a non-success status
    #[error("Server error: {status} ({code}) - {message}")]
    Status {
        status: u16,
        code: String,
        message: String,
    },

    /// Payload could not be decoded
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Success envelope without the expected data
    #[error("Response from '{path}' carried no data")]
    EmptyData { path: String },
}

impl ApiError {
    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Application error code from the response envelope, if any.
    pub fn server_code(&self) -> Option<&str> {
        match self {
            ApiError::Status { code, .. } if !code.is_empty() => Some(code),
            _ => None,
        }
    }

    /// Error category for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client_error",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Transport { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Status { .. } => "server_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::EmptyData { .. } => "empty_data",
        }
    }
}
