use crate::engine::RoundState;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PuzzleIntent {
    /// A new round was initialized; replaces any previous one.
    Start { round: RoundState },
    /// A guessed character, from the keyboard or the relay.
    Guess { input: char },
    /// First step of the new-game gate: ask for confirmation.
    RequestNewGame,
    /// User declined the new game.
    CancelNewGame,
    /// Show a one-line message under the status.
    Notice { message: String },
}

impl Intent for PuzzleIntent {}
