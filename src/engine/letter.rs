use std::fmt;
use std::str::FromStr;

use super::error::EngineError;

/// A single guessable letter, always uppercase ASCII A-Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Validate a character as a guess.
    ///
    /// Only `'A'..='Z'` is accepted; callers that take keyboard input
    /// uppercase it first.
    pub fn new(ch: char) -> Result<Self, EngineError> {
        if ch.is_ascii_uppercase() {
            Ok(Self(ch))
        } else {
            Err(EngineError::InvalidLetter {
                input: ch.to_string(),
            })
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Position in the alphabet, `A` = 0.
    pub fn index(self) -> usize {
        usize::from(self.0 as u8 - b'A')
    }

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|&i| i < 26)
            .map(|i| Self(char::from(b'A' + i)))
    }

    /// The full board, A through Z.
    pub fn alphabet() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }
}

impl FromStr for Letter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Letter::new(ch),
            _ => Err(EngineError::InvalidLetter {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = EngineError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::new(ch)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
