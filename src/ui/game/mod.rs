mod intent;
mod reducer;
mod state;

pub use intent::PuzzleIntent;
pub use reducer::PuzzleReducer;
pub use state::PuzzleViewState;
