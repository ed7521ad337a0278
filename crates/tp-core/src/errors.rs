//! Cross-cutting error types.
//!
//! Transport errors live in `tp-client` and configuration errors in
//! `tp-config`; both converge into `anyhow` inside the binary.

use thiserror::Error;

/// Errors raised while building or checking records locally.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A request failed local validation before being sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A schema was requested for a type name that is not registered.
    #[error("Unknown record type: {0}")]
    UnknownType(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
