use serde::{Deserialize, Serialize};

/// A validated quote candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Whether this quote can be played under the given length limit.
    ///
    /// Length is measured in characters. A quote with no A-Z letter would be
    /// solved before the first guess, so it is never eligible.
    pub fn is_eligible(&self, max_length: usize) -> bool {
        self.text.chars().count() <= max_length && self.text.chars().any(|ch| ch.is_ascii_alphabetic())
    }
}

/// Keep only the candidates playable under `max_length`.
pub fn eligible_quotes(pool: &[Quote], max_length: usize) -> Vec<&Quote> {
    pool.iter().filter(|quote| quote.is_eligible(max_length)).collect()
}
