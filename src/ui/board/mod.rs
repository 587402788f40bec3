//! Controller letter board.
//!
//! The controller never sees the quote. It only tracks which letters it has
//! already sent so the same letter is not relayed twice.

mod intent;
mod reducer;
mod state;

pub use intent::BoardIntent;
pub use reducer::BoardReducer;
pub use state::{BoardState, BOARD_COLUMNS};
