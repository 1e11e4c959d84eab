use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment value could not be parsed into `BeaconConfig`.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// Parsed, but unusable (e.g. a base URL without a scheme).
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
