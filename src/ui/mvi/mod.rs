//! Model-View-Intent (MVI) primitives.
//!
//! The UI owns exactly one copy of each state value and replaces it
//! wholesale on every intent.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a view needs to render, nothing more
//! - **Intent**: a key press, a relayed guess, a finished round setup
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
