//! Behavioral tests for the puzzle engine: fixed scenarios plus property
//! checks over arbitrary guess sequences.

use proptest::prelude::*;
use quoteguess::engine::{
    submit_guess, EngineConfig, EngineError, Letter, PuzzleEngine, Quote, RoundPhase, RoundState,
    StatusMessage, StrikeIcon,
};

fn start(text: &str) -> RoundState {
    PuzzleEngine::with_seed(EngineConfig::default(), 11)
        .init_round(&[Quote::new(text, "Anon")])
        .expect("quote should be eligible")
}

fn guess_all(mut state: RoundState, letters: &str) -> RoundState {
    for ch in letters.chars() {
        state = submit_guess(&state, ch).expect("valid letter");
    }
    state
}

fn letters(state: &[Letter]) -> String {
    state.iter().map(|l| l.as_char()).collect()
}

// -- Scenarios ---------------------------------------------------------------

#[test]
fn three_wrong_letters_strike_out() {
    let state = guess_all(start("TEST QUOTE"), "ZXW");

    assert!(state.strikeout());
    assert!(state.game_over());
    assert_eq!(letters(&state.bad_guesses()), "WXZ");
    assert_eq!(state.status_message(), StatusMessage::Lost);
    assert_eq!(state.phase(), RoundPhase::Lost);
}

#[test]
fn fourth_wrong_letter_is_blocked() {
    let state = guess_all(start("TEST QUOTE"), "ZXWY");
    assert_eq!(state.bad_guesses().len(), 3);
    assert_eq!(state.guesses().len(), 3);
}

#[test]
fn only_short_candidate_is_picked() {
    let pool = vec![
        Quote::new("A VERY LONG QUOTE EXCEEDING FORTY CHARACTERS TOTAL", "X"),
        Quote::new("HI", "Y"),
    ];
    for seed in 0..32 {
        let mut engine = PuzzleEngine::with_seed(EngineConfig::default(), seed);
        let state = engine.init_round(&pool).expect("HI is eligible");
        assert_eq!(state.current_quote(), "HI");
        assert_eq!(state.quote_author(), "Y");
    }
}

#[test]
fn all_too_long_pool_has_no_eligible_quotes() {
    let pool = vec![
        Quote::new("A VERY LONG QUOTE EXCEEDING FORTY CHARACTERS TOTAL", "X"),
        Quote::new("ANOTHER QUOTE THAT IS FAR TOO LONG TO FIT ON SCREEN", "Y"),
    ];
    let mut engine = PuzzleEngine::with_seed(EngineConfig::default(), 0);
    assert!(matches!(
        engine.init_round(&pool),
        Err(EngineError::NoEligibleQuotes { candidates: 2, max_length: 40 })
    ));
}

#[test]
fn fresh_round_starts_neutral() {
    let state = start("Stay hungry, stay foolish.");
    assert_eq!(state.current_quote(), "STAY HUNGRY, STAY FOOLISH.");
    assert!(state.guesses().is_empty());
    assert!(state.strikes().iter().all(|s| s.icon == StrikeIcon::Open && s.guess.is_none()));
    assert!(!state.game_over());
    assert_eq!(state.status_message(), StatusMessage::Prompt);
    assert_eq!(state.revealed_text(), "____ ______, ____ _______.");
}

#[test]
fn game_over_reveals_everything() {
    let state = guess_all(start("AB"), "XYZ");
    assert_eq!(state.revealed_text(), "AB");
}

#[test]
fn repeated_letters_count_per_position() {
    let state = start("EEL");
    assert_eq!(state.unrevealed_count(), 3);
    let state = submit_guess(&state, 'E').unwrap();
    assert_eq!(state.unrevealed_count(), 1);
    let state = submit_guess(&state, 'L').unwrap();
    assert!(state.puzzle_complete());
    assert_eq!(state.status_message(), StatusMessage::Won);
}

#[test]
fn invalid_input_leaves_state_untouched() {
    let state = submit_guess(&start("HI"), 'H').unwrap();
    for bad in ['h', '1', ' ', '?', 'Ü'] {
        assert!(matches!(
            submit_guess(&state, bad),
            Err(EngineError::InvalidLetter { .. })
        ));
    }
    assert_eq!(letters(state.guesses()), "H");
}

#[test]
fn new_round_replaces_finished_one() {
    let mut engine = PuzzleEngine::with_seed(EngineConfig::default(), 5);
    let pool = [Quote::new("OK", "Z")];
    let done = guess_all(engine.init_round(&pool).unwrap(), "OK");
    assert_eq!(done.phase(), RoundPhase::Won);

    let next = engine.init_round(&pool).unwrap();
    assert_eq!(next.phase(), RoundPhase::InProgress);
    assert!(next.guesses().is_empty());
}

// -- Properties --------------------------------------------------------------

fn quote_text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,.'!?]{0,39}"
}

fn guess_sequence() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('A', 'Z'), 0..40)
}

proptest! {
    #[test]
    fn strike_row_length_is_fixed(
        text in quote_text(),
        strikes in 1usize..6,
        guesses in guess_sequence(),
    ) {
        let config = EngineConfig { allowed_strikes: strikes, ..EngineConfig::default() };
        let mut state = PuzzleEngine::with_seed(config, 0)
            .init_round(&[Quote::new(text, "P")])
            .unwrap();
        prop_assert_eq!(state.strikes().len(), strikes);
        for ch in guesses {
            state = submit_guess(&state, ch).unwrap();
            prop_assert_eq!(state.strikes().len(), strikes);
        }
    }

    #[test]
    fn repeating_a_guess_changes_nothing(
        text in quote_text(),
        guesses in guess_sequence(),
        letter in prop::char::range('A', 'Z'),
    ) {
        let mut state = start(&text);
        for ch in guesses {
            state = submit_guess(&state, ch).unwrap();
        }
        let once = submit_guess(&state, letter).unwrap();
        let twice = submit_guess(&once, letter).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn finished_rounds_are_frozen(
        text in quote_text(),
        guesses in guess_sequence(),
        extra in guess_sequence(),
    ) {
        let mut state = start(&text);
        for ch in guesses {
            state = submit_guess(&state, ch).unwrap();
            if state.game_over() {
                break;
            }
        }
        prop_assume!(state.game_over());
        let frozen = state.clone();
        for ch in extra {
            state = submit_guess(&state, ch).unwrap();
        }
        prop_assert_eq!(state, frozen);
    }

    #[test]
    fn strikeout_matches_distinct_wrong_letters(
        text in quote_text(),
        guesses in guess_sequence(),
    ) {
        let mut state = start(&text);
        for ch in guesses {
            state = submit_guess(&state, ch).unwrap();
        }
        let wrong = state
            .guesses()
            .iter()
            .filter(|l| !state.current_quote().contains(l.as_char()))
            .count();
        prop_assert!(wrong <= state.allowed_strikes());
        prop_assert_eq!(state.strikeout(), wrong == state.allowed_strikes());
    }

    #[test]
    fn guessing_every_quote_letter_wins_cleanly(text in quote_text()) {
        let mut state = start(&text);
        let mut seen = Vec::new();
        for ch in state.current_quote().chars().filter(|c| c.is_ascii_uppercase()) {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        for ch in seen {
            state = submit_guess(&state, ch).unwrap();
        }
        prop_assert!(state.puzzle_complete());
        prop_assert!(state.game_over());
        prop_assert!(state.bad_guesses().is_empty());
        prop_assert_eq!(state.status_message(), StatusMessage::Won);
    }
}
