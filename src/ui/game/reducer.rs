use crate::engine::submit_guess;
use crate::ui::game::intent::PuzzleIntent;
use crate::ui::game::state::PuzzleViewState;
use crate::ui::mvi::Reducer;

pub struct PuzzleReducer;

impl Reducer for PuzzleReducer {
    type State = PuzzleViewState;
    type Intent = PuzzleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PuzzleIntent::Start { round } => PuzzleViewState {
                round: Some(round),
                confirm_new_game: false,
                notice: None,
            },
            PuzzleIntent::Guess { input } => {
                // Applied even while the new-game prompt is open; relayed
                // letters come through here. Key presses are gated in input.
                let Some(round) = state.round.as_ref() else {
                    return state;
                };
                match submit_guess(round, input) {
                    Ok(next) => PuzzleViewState {
                        round: Some(next),
                        notice: None,
                        ..state
                    },
                    Err(err) => PuzzleViewState {
                        notice: Some(err.to_string()),
                        ..state
                    },
                }
            }
            PuzzleIntent::RequestNewGame => match state.round {
                Some(_) => PuzzleViewState {
                    confirm_new_game: true,
                    ..state
                },
                None => state,
            },
            PuzzleIntent::CancelNewGame => PuzzleViewState {
                confirm_new_game: false,
                ..state
            },
            PuzzleIntent::Notice { message } => PuzzleViewState {
                notice: Some(message),
                ..state
            },
        }
    }
}
