//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const FORMATS: [&str; 3] = ["json", "table", "raw"];

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given: json, table, raw.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if FORMATS.contains(&self.default_format.as_str()) {
            return Ok(());
        }
        Err(ConfigError::InvalidValue {
            field: "general.default_format".to_string(),
            reason: format!(
                "expected one of {}, got '{}'",
                FORMATS.join(", "),
                self.default_format
            ),
        })
    }
}
