use thiserror::Error;

/// Errors on the relay path between controller and display.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to connect to relay at '{addr}': {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Relay connection to '{addr}' timed out after {seconds}s")]
    Timeout { addr: String, seconds: u64 },

    #[error("Failed to bind relay on '{addr}': {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Relay I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode relay message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Relay channel closed")]
    Closed,
}
