//! Puzzle state machine for the guessing game.
//!
//! ```text
//! NotStarted ──init_round──→ InProgress ──submit_guess──→ Won | Lost
//!                                ↑                          │
//!                                └────────init_round────────┘
//! ```
//!
//! The engine is synchronous and free of I/O. Quote fetching, relaying and
//! rendering live in other modules and only exchange values with it.

mod error;
mod letter;
mod puzzle;
mod quote;
mod round;

pub use error::EngineError;
pub use letter::Letter;
pub use puzzle::{
    submit_guess, submit_letter, EngineConfig, PuzzleEngine, DEFAULT_ALLOWED_STRIKES,
    DEFAULT_MAX_LENGTH,
};
pub use quote::{eligible_quotes, Quote};
pub use round::{RoundPhase, RoundState, StatusMessage, Strike, StrikeIcon, DEFAULT_MASK};
