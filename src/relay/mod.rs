//! Relay between a controller and a display.
//!
//! The relay only carries letters; it never touches round state. The
//! display funnels every received letter through the same
//! `submit_guess` path as local key presses, so duplicate or late delivery
//! is absorbed by the engine's re-guess no-op.
//!
//! ```text
//! controller ──GuessSink::send──→ transport ──GuessHandler::on_receive──→ display
//! ```

mod client;
mod error;
mod local;
mod message;
mod server;

use std::future::Future;

use crate::engine::Letter;

pub use client::RelayClient;
pub use error::RelayError;
pub use local::{LocalRelay, LocalSink};
pub use message::{accept_line, Rejected, RelayMessage};
pub use server::RelayServer;

/// Sending half: publishes one guessed letter.
pub trait GuessSink: Send + Sync + 'static {
    fn send(&self, letter: Letter) -> impl Future<Output = Result<(), RelayError>> + Send;
}

/// Receiving half: observes letters as they arrive.
pub trait GuessHandler: Send + Sync + 'static {
    /// Returns `false` once the receiver is gone and delivery should stop.
    fn on_receive(&self, letter: Letter) -> bool;
}
