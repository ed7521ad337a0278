//! Client error types.

use thiserror::Error;
use tp_core::errors::CoreError;

/// Errors that can occur when talking to the tutoring backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// FastAPI `detail` text when present, otherwise the response body.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("decode error on {path}: {reason}")]
    Decode { path: String, reason: String },

    /// Request was rejected locally before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] CoreError),
}

impl ClientError {
    /// HTTP status for [`ClientError::Api`], else `None`.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
