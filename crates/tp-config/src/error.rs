use thiserror::Error;

/// Why the TutorPilot configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error("failed to read tutorpilot configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is unusable, e.g. a base URL without a scheme.
    #[error("bad value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
