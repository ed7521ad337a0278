//! # tp-config
//!
//! Layered configuration loading for the TutorPilot client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. `TUTORPILOT_API_URL` (mapped to `api.base_url`)
//! 2. Environment variables (`TUTORPILOT_*` prefix, `__` as separator)
//! 3. Project-level `.tutorpilot/config.toml`
//! 4. User-level `~/.config/tutorpilot/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TUTORPILOT_API__TIMEOUT_SECS` -> `api.timeout_secs`,
//! `TUTORPILOT_DEFAULTS__TUTOR_ID` -> `defaults.tutor_id`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tp_config::TutorConfig;
//!
//! let config = TutorConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod defaults;
mod error;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use defaults::DefaultsConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The single environment variable documented for pointing at a backend.
pub const API_URL_ENV: &str = "TUTORPILOT_API_URL";

const ENV_PREFIX: &str = "TUTORPILOT_";
const PROJECT_CONFIG: &str = ".tutorpilot/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TutorConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl TutorConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory or
    /// its ancestors.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(error) if error.not_found() => {}
            Err(error) => tracing::warn!(%error, "ignoring unreadable .env"),
        }
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on extraction failure and
    /// [`ConfigError::InvalidValue`] when validation rejects a value.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let mut config: Self = figment.extract()?;
        config.api.normalize()?;
        Ok(config)
    }

    /// Build the standard provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(Self::user_config_path().as_deref())
    }

    /// Build the provider chain with an explicit user-level config file.
    #[must_use]
    pub fn figment_with(user_config: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = user_config.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        let project = PathBuf::from(PROJECT_CONFIG);
        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&[API_URL_ENV])
                    .map(|_| "api.base_url".into()),
            )
    }

    /// Path to the user-level config file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tutorpilot").join("config.toml"))
    }
}
