//! # beacon-config
//!
//! Layered configuration loading for Beacon using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BEACON_*` prefix, `__` as separator)
//! 2. Project-level `.beacon/config.toml`
//! 3. User-level `~/.config/beacon/config.toml`
//! 4. Built-in defaults
//!
//! `BEACON_BACKEND__BASE_URL` maps to `backend.base_url`,
//! `BEACON_GENERAL__DEFAULT_FORMAT` to `general.default_format`.
//!
//! ```no_run
//! use beacon_config::BeaconConfig;
//!
//! let config = BeaconConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.base_url);
//! ```

mod backend;
mod error;
mod general;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BeaconConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BeaconConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".beacon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("BEACON_").split("__"))
    }

    /// Replace the backend base URL (e.g. from a `--backend` flag) and re-validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the URL is not usable.
    pub fn with_backend_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.backend.base_url = base_url.to_string();
        self.validate()?;
        Ok(self)
    }

    /// Check every section for values that would make the client unusable.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()?;
        self.general.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("beacon").join("config.toml"))
    }
}
