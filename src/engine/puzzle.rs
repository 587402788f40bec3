//! The puzzle engine: round setup and guess submission.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::error::EngineError;
use super::letter::Letter;
use super::quote::{eligible_quotes, Quote};
use super::round::{RoundState, DEFAULT_MASK};

pub const DEFAULT_MAX_LENGTH: usize = 40;
pub const DEFAULT_ALLOWED_STRIKES: usize = 3;

/// Policy knobs for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_length: usize,
    pub allowed_strikes: usize,
    pub mask: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            allowed_strikes: DEFAULT_ALLOWED_STRIKES,
            mask: DEFAULT_MASK,
        }
    }
}

/// Deterministic bookkeeping for rounds of the guessing game.
///
/// The engine only owns its policy and the RNG used to pick quotes. Round
/// state is passed in and returned so the caller keeps the single
/// authoritative copy.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl PuzzleEngine {
    /// Engine seeded from OS entropy.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Engine with reproducible quote selection.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// A round always has at least one strike slot.
    fn with_rng(mut config: EngineConfig, rng: ChaCha8Rng) -> Self {
        if config.allowed_strikes == 0 {
            tracing::warn!("allowed_strikes of 0 raised to 1");
            config.allowed_strikes = 1;
        }
        Self { config, rng }
    }

    /// Start a fresh round from a candidate pool.
    ///
    /// Candidates longer than `max_length` are dropped before one is picked
    /// uniformly at random.
    pub fn init_round(&mut self, quote_pool: &[Quote]) -> Result<RoundState, EngineError> {
        let eligible = eligible_quotes(quote_pool, self.config.max_length);
        let Some(quote) = eligible.choose(&mut self.rng) else {
            return Err(EngineError::NoEligibleQuotes {
                candidates: quote_pool.len(),
                max_length: self.config.max_length,
            });
        };

        tracing::debug!(
            candidates = quote_pool.len(),
            eligible = eligible.len(),
            author = %quote.author,
            "Round initialized"
        );
        Ok(RoundState::new(
            &quote.text,
            &quote.author,
            self.config.allowed_strikes,
            self.config.mask,
        ))
    }
}

/// Submit one guessed character against a round.
///
/// Anything other than a single A-Z letter is rejected and the caller's
/// state is left as it was. Re-guesses and guesses after the round ended
/// return an identical state.
pub fn submit_guess(state: &RoundState, letter: char) -> Result<RoundState, EngineError> {
    let letter = Letter::new(letter)?;
    Ok(submit_letter(state, letter))
}

/// Submit an already validated letter.
pub fn submit_letter(state: &RoundState, letter: Letter) -> RoundState {
    let before = state.guesses().len();
    let next = state.clone().apply_guess(letter);
    if next.guesses().len() == before {
        tracing::trace!(%letter, "Guess ignored");
    } else {
        tracing::debug!(
            %letter,
            strikes = next.bad_guesses().len(),
            game_over = next.game_over(),
            "Guess applied"
        );
    }
    next
}
