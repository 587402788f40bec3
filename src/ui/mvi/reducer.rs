//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where UI state transitions happen.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    ///
    /// Must not perform I/O. Anything that needs the network or the RNG is
    /// done by the caller and arrives here as intent data.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
