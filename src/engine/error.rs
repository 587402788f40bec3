use thiserror::Error;

/// Errors raised by the puzzle engine.
///
/// Re-guesses and guesses after the round has ended are not errors; the
/// engine treats them as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Every candidate quote was filtered out, so no round can start.
    #[error("No eligible quotes: {candidates} candidate(s), none with at most {max_length} characters")]
    NoEligibleQuotes { candidates: usize, max_length: usize },

    /// The guess was not exactly one uppercase letter A-Z.
    #[error("Invalid letter '{input}': expected a single letter A-Z")]
    InvalidLetter { input: String },
}
