use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quoteguess/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quoteguess").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one strike is allowed and quotes may have a length
    /// - The mask is not itself a guessable letter
    /// - The relay channel is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.allowed_strikes == 0 {
            return Err(ConfigError::ValidationError {
                message: "game.allowed_strikes must be at least 1".to_string(),
            });
        }

        if self.game.max_length == 0 {
            return Err(ConfigError::ValidationError {
                message: "game.max_length must be at least 1".to_string(),
            });
        }

        if self.game.mask.is_ascii_alphabetic() {
            return Err(ConfigError::ValidationError {
                message: format!("game.mask '{}' must not be a letter", self.game.mask),
            });
        }

        if self.relay.channel.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "relay.channel must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
