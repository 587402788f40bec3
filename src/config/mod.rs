//! Configuration loading.
//!
//! A missing file means defaults; CLI flags are layered on top by the binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GameConfig, QuotesConfig, RelayConfig};
