//! Round state and the queries derived from it.
//!
//! A `RoundState` is a plain value: the engine consumes one and returns the
//! next. Nothing here performs I/O.

use super::letter::Letter;

/// Placeholder shown for letters that are still hidden.
pub const DEFAULT_MASK: char = '_';

/// Visual state of one strike slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeIcon {
    /// Unused life.
    Open,
    /// Life consumed by a wrong guess.
    Struck,
}

impl StrikeIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            StrikeIcon::Open => "⚪",
            StrikeIcon::Struck => "🚫",
        }
    }
}

/// One slot in the fixed-length strike row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub icon: StrikeIcon,
    /// The wrong letter that consumed this slot, if any.
    pub guess: Option<Letter>,
}

impl Strike {
    pub const fn open() -> Self {
        Self {
            icon: StrikeIcon::Open,
            guess: None,
        }
    }

    pub const fn struck(letter: Letter) -> Self {
        Self {
            icon: StrikeIcon::Struck,
            guess: Some(letter),
        }
    }
}

/// User-facing status line for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Prompt,
    Lost,
    Won,
    /// Only reachable if the state was built inconsistently.
    Unknown,
}

impl StatusMessage {
    pub fn text(self) -> &'static str {
        match self {
            StatusMessage::Prompt => "☝️ Pick a letter",
            StatusMessage::Lost => "❌ You lost this round. Try again?",
            StatusMessage::Won => "🎉 You win!",
            StatusMessage::Unknown => "😬 Unforeseen error state, maybe try a new game?",
        }
    }
}

/// Where a round sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

/// The mutable aggregate of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    current_quote: String,
    quote_author: String,
    /// Distinct guesses in submission order.
    guesses: Vec<Letter>,
    /// Newest strike first. Length is always `allowed_strikes`.
    strikes: Vec<Strike>,
    allowed_strikes: usize,
    game_over: bool,
    mask: char,
}

impl RoundState {
    pub(crate) fn new(quote_text: &str, author: &str, allowed_strikes: usize, mask: char) -> Self {
        Self {
            current_quote: quote_text.to_uppercase(),
            quote_author: author.to_string(),
            guesses: Vec::new(),
            strikes: vec![Strike::open(); allowed_strikes],
            allowed_strikes,
            game_over: false,
            mask,
        }
    }

    pub fn current_quote(&self) -> &str {
        &self.current_quote
    }

    pub fn quote_author(&self) -> &str {
        &self.quote_author
    }

    pub fn guesses(&self) -> &[Letter] {
        &self.guesses
    }

    pub fn strikes(&self) -> &[Strike] {
        &self.strikes
    }

    pub fn allowed_strikes(&self) -> usize {
        self.allowed_strikes
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guesses.contains(&letter)
    }

    /// Apply one validated guess.
    ///
    /// No-op once the round is over or when the letter was already guessed.
    pub(crate) fn apply_guess(mut self, letter: Letter) -> Self {
        if self.game_over || self.has_guessed(letter) {
            return self;
        }

        self.guesses.push(letter);
        if !self.current_quote.contains(letter.as_char()) {
            self.strikes.pop();
            self.strikes.insert(0, Strike::struck(letter));
        }
        self.game_over = self.strikeout() || self.puzzle_complete();
        self
    }

    /// How a quote character should be displayed.
    ///
    /// Anything outside A-Z (spaces, punctuation, digits) is always shown.
    pub fn is_revealed(&self, ch: char) -> char {
        if !ch.is_ascii_alphabetic() {
            return ch;
        }
        let guessed = Letter::new(ch.to_ascii_uppercase())
            .map(|letter| self.has_guessed(letter))
            .unwrap_or(false);
        if guessed || self.game_over {
            ch
        } else {
            self.mask
        }
    }

    /// The quote as currently displayed.
    pub fn revealed_text(&self) -> String {
        self.current_quote.chars().map(|ch| self.is_revealed(ch)).collect()
    }

    /// Wrong letters, newest first.
    pub fn bad_guesses(&self) -> Vec<Letter> {
        self.strikes.iter().filter_map(|strike| strike.guess).collect()
    }

    pub fn strikeout(&self) -> bool {
        self.bad_guesses().len() >= self.allowed_strikes
    }

    /// Hidden letters counted per position, so `"EE"` with nothing guessed is 2.
    pub fn unrevealed_count(&self) -> usize {
        self.current_quote
            .chars()
            .filter(|ch| ch.is_ascii_alphabetic())
            .filter(|&ch| {
                !Letter::new(ch)
                    .map(|letter| self.has_guessed(letter))
                    .unwrap_or(false)
            })
            .count()
    }

    pub fn puzzle_complete(&self) -> bool {
        self.unrevealed_count() == 0
    }

    pub fn status_message(&self) -> StatusMessage {
        if !self.game_over {
            StatusMessage::Prompt
        } else if self.strikeout() {
            StatusMessage::Lost
        } else if self.puzzle_complete() {
            StatusMessage::Won
        } else {
            StatusMessage::Unknown
        }
    }

    pub fn phase(&self) -> RoundPhase {
        match self.status_message() {
            StatusMessage::Prompt => RoundPhase::InProgress,
            StatusMessage::Lost => RoundPhase::Lost,
            StatusMessage::Won => RoundPhase::Won,
            // Treat an inconsistent finished round as lost so it still accepts a new game.
            StatusMessage::Unknown => RoundPhase::Lost,
        }
    }
}
