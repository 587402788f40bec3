use crate::engine::Letter;
use crate::ui::mvi::UiState;

/// Letters per board row.
pub const BOARD_COLUMNS: usize = 9;

const BOARD_SIZE: usize = 26;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    /// Letters already relayed, in send order.
    pub sent: Vec<Letter>,
    /// Index into A-Z.
    pub cursor: usize,
}

impl UiState for BoardState {}

impl BoardState {
    pub fn selected(&self) -> Option<Letter> {
        Letter::from_index(self.cursor)
    }

    pub fn was_sent(&self, letter: Letter) -> bool {
        self.sent.contains(&letter)
    }

    pub(crate) fn size() -> usize {
        BOARD_SIZE
    }
}
