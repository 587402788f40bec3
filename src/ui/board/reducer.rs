use crate::ui::board::intent::BoardIntent;
use crate::ui::board::state::{BoardState, BOARD_COLUMNS};
use crate::ui::mvi::Reducer;

pub struct BoardReducer;

impl Reducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let size = BoardState::size();
        match intent {
            BoardIntent::MoveLeft => BoardState {
                cursor: (state.cursor + size - 1) % size,
                ..state
            },
            BoardIntent::MoveRight => BoardState {
                cursor: (state.cursor + 1) % size,
                ..state
            },
            BoardIntent::MoveUp => {
                let cursor = if state.cursor >= BOARD_COLUMNS {
                    state.cursor - BOARD_COLUMNS
                } else {
                    state.cursor
                };
                BoardState { cursor, ..state }
            }
            BoardIntent::MoveDown => {
                let cursor = if state.cursor + BOARD_COLUMNS < size {
                    state.cursor + BOARD_COLUMNS
                } else {
                    state.cursor
                };
                BoardState { cursor, ..state }
            }
            BoardIntent::Select { letter } => BoardState {
                cursor: letter.index(),
                ..state
            },
            BoardIntent::Sent { letter } => {
                let mut sent = state.sent;
                if !sent.contains(&letter) {
                    sent.push(letter);
                }
                BoardState { sent, ..state }
            }
            BoardIntent::Reset => BoardState {
                sent: Vec::new(),
                ..state
            },
        }
    }
}
