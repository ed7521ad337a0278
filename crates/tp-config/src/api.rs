//! Backend connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Generation calls routinely take minutes, so the default is generous.
const fn default_timeout_secs() -> u64 {
    600
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("tutorpilot/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend root, e.g. `http://localhost:8000`. No trailing slash after
    /// normalization.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Replace the base URL, validating and normalizing the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the URL is not http(s).
    pub fn set_base_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.base_url = normalize_base_url(url)?;
        Ok(())
    }

    pub(crate) fn normalize(&mut self) -> Result<(), ConfigError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Trim whitespace and trailing slashes; require an `http://` or `https://`
/// scheme with a non-empty host part.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let rest = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .ok_or_else(|| {
            ConfigError::invalid("api.base_url", format!("expected http(s) URL, got '{raw}'"))
        })?;
    if rest.is_empty() {
        return Err(ConfigError::invalid("api.base_url", "missing host"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 600);
        assert!(config.user_agent.starts_with("tutorpilot/"));
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let mut config = ApiConfig::default();
        config.set_base_url("https://tutor.example.com/// ").unwrap();
        assert_eq!(config.base_url, "https://tutor.example.com");
    }

    #[test]
    fn path_prefix_is_kept() {
        let mut config = ApiConfig::default();
        config.set_base_url("http://gateway:9000/tutorpilot/").unwrap();
        assert_eq!(config.base_url, "http://gateway:9000/tutorpilot");
    }

    #[test]
    fn rejects_non_http_schemes() {
        let mut config = ApiConfig::default();
        let err = config.set_base_url("ftp://files.example.com").unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
        assert!(config.set_base_url("localhost:8000").is_err());
        assert!(config.set_base_url("http://").is_err());
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(config.normalize().is_err());
    }
}
