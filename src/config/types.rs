use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, DEFAULT_ALLOWED_STRIKES, DEFAULT_MASK, DEFAULT_MAX_LENGTH};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub quotes: QuotesConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}

/// Puzzle rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Longest quote, in characters, that can be picked (default: 40).
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Wrong guesses that end a round (default: 3).
    #[serde(default = "default_allowed_strikes")]
    pub allowed_strikes: usize,
    /// Placeholder for hidden letters (default: '_').
    #[serde(default = "default_mask")]
    pub mask: char,
    /// Fixed RNG seed for reproducible quote selection.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Where quotes come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotesConfig {
    /// HTTP endpoint serving a JSON array of `{text, author}`.
    #[serde(default = "default_quotes_url")]
    pub url: String,
    /// Local JSON file. Takes precedence over `url` when set.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// HTTP request timeout in seconds (default: 10).
    #[serde(default = "default_quotes_timeout")]
    pub timeout_seconds: u32,
}

/// Two-terminal relay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Shared channel id. Messages for other channels are ignored.
    #[serde(default = "default_channel")]
    pub channel: String,
    /// Address the display listens on (host:port).
    #[serde(default = "default_relay_addr")]
    pub bind_addr: String,
    /// Address the controller connects to (host:port).
    #[serde(default = "default_relay_addr")]
    pub connect_addr: String,
    /// Controller connect timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_allowed_strikes() -> usize {
    DEFAULT_ALLOWED_STRIKES
}

fn default_mask() -> char {
    DEFAULT_MASK
}

fn default_quotes_url() -> String {
    "https://type.fit/api/quotes".to_string()
}

fn default_quotes_timeout() -> u32 {
    10
}

fn default_channel() -> String {
    "demo".to_string()
}

fn default_relay_addr() -> String {
    "127.0.0.1:7878".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            allowed_strikes: default_allowed_strikes(),
            mask: default_mask(),
            seed: None,
        }
    }
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            url: default_quotes_url(),
            file: None,
            timeout_seconds: default_quotes_timeout(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            bind_addr: default_relay_addr(),
            connect_addr: default_relay_addr(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl GameConfig {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_length: self.max_length,
            allowed_strikes: self.allowed_strikes,
            mask: self.mask,
        }
    }
}
