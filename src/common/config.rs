//! Configuration file handling

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use super::paths::config_path;
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset and no `-v` is given
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "fibonacci=warn,warn".to_string()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    ///
    /// The logging filter must be a valid `EnvFilter` directive string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        EnvFilter::try_new(&config.logging.filter).map_err(|e| {
            Error::ConfigParse(format!(
                "invalid logging filter '{}': {}",
                config.logging.filter, e
            ))
        })?;
        Ok(config)
    }
}
