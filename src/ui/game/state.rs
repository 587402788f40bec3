use crate::engine::{RoundPhase, RoundState};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PuzzleViewState {
    /// `None` until the first round has been initialized.
    pub round: Option<RoundState>,
    /// When true, the next confirmation starts a new round.
    pub confirm_new_game: bool,
    /// Last recoverable problem (invalid key, relay hiccup).
    pub notice: Option<String>,
}

impl UiState for PuzzleViewState {}

impl PuzzleViewState {
    pub fn phase(&self) -> RoundPhase {
        self.round
            .as_ref()
            .map_or(RoundPhase::NotStarted, RoundState::phase)
    }
}
