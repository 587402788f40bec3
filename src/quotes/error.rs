use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the quote pool.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Quote request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Quote request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read quote file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse quotes from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No usable quotes from {origin}")]
    Empty { origin: String },
}
