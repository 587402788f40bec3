use crate::engine::{Letter, PuzzleEngine, Quote, RoundPhase};
use crate::ui::board::{BoardIntent, BoardReducer, BoardState};
use crate::ui::game::{PuzzleIntent, PuzzleReducer, PuzzleViewState};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

/// Which side of a game this terminal plays.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Role {
    /// Single terminal: keys guess directly.
    Solo,
    /// Owns the puzzle and accepts relayed guesses; local keys also guess.
    Display,
    /// Letter board that relays guesses to a display.
    Controller,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Solo => "Solo",
            Role::Display => "Display",
            Role::Controller => "Controller",
        }
    }

    pub fn owns_puzzle(self) -> bool {
        !matches!(self, Role::Controller)
    }
}

#[derive(Debug)]
pub enum UiCommand {
    SendGuess { letter: Letter },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    role: Role,
    should_quit: bool,
    channel: String,
    engine: PuzzleEngine,
    quotes: Vec<Quote>,
    /// Authoritative round state (MVI pattern).
    puzzle: PuzzleViewState,
    /// Controller board state (MVI pattern).
    board: BoardState,
    command_sender: Option<UiCommandSender>,
    last_relay_error: Option<String>,
}

impl App {
    pub fn new(role: Role, engine: PuzzleEngine, quotes: Vec<Quote>, channel: impl Into<String>) -> Self {
        Self {
            role,
            should_quit: false,
            channel: channel.into(),
            engine,
            quotes,
            puzzle: PuzzleViewState::default(),
            board: BoardState::default(),
            command_sender: None,
            last_relay_error: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn puzzle(&self) -> &PuzzleViewState {
        &self.puzzle
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }

    pub fn last_relay_error(&self) -> Option<&str> {
        self.last_relay_error.as_deref()
    }

    pub fn phase(&self) -> RoundPhase {
        self.puzzle.phase()
    }

    pub fn awaiting_confirmation(&self) -> bool {
        self.puzzle.confirm_new_game
    }

    /// Pick a quote and replace the current round.
    ///
    /// An empty eligible pool leaves the previous state in place and shows
    /// the error instead.
    pub fn start_round(&mut self) {
        match self.engine.init_round(&self.quotes) {
            Ok(round) => {
                tracing::info!(role = self.role.label(), "New round started");
                dispatch_mvi!(self, puzzle, PuzzleReducer, PuzzleIntent::Start { round });
            }
            Err(err) => {
                tracing::error!(error = %err, "Cannot start round");
                dispatch_mvi!(
                    self,
                    puzzle,
                    PuzzleReducer,
                    PuzzleIntent::Notice {
                        message: err.to_string()
                    }
                );
            }
        }
    }

    /// A character typed on this terminal.
    pub fn guess_key(&mut self, ch: char) {
        let ch = ch.to_ascii_uppercase();
        match self.role {
            Role::Controller => {
                if let Ok(letter) = Letter::try_from(ch) {
                    dispatch_mvi!(self, board, BoardReducer, BoardIntent::Select { letter });
                    self.send_letter(letter);
                }
            }
            Role::Solo | Role::Display => {
                dispatch_mvi!(self, puzzle, PuzzleReducer, PuzzleIntent::Guess { input: ch });
            }
        }
    }

    /// A letter delivered by the relay.
    ///
    /// Goes through the same reducer as local keys, so duplicates are no-ops.
    pub fn on_relay_guess(&mut self, letter: Letter) {
        if self.role != Role::Display {
            tracing::warn!(%letter, role = self.role.label(), "Relayed guess ignored");
            return;
        }
        dispatch_mvi!(
            self,
            puzzle,
            PuzzleReducer,
            PuzzleIntent::Guess {
                input: letter.as_char()
            }
        );
    }

    pub fn on_relay_error(&mut self, message: String) {
        tracing::warn!(%message, "Relay error");
        self.last_relay_error = Some(message);
    }

    /// "New game" key. Opens the confirmation gate on the puzzle side and
    /// clears the board on the controller side.
    pub fn request_new_game(&mut self) {
        match self.role {
            Role::Controller => {
                dispatch_mvi!(self, board, BoardReducer, BoardIntent::Reset);
            }
            Role::Solo | Role::Display => {
                if self.puzzle.round.is_none() {
                    self.start_round();
                } else {
                    dispatch_mvi!(self, puzzle, PuzzleReducer, PuzzleIntent::RequestNewGame);
                }
            }
        }
    }

    pub fn confirm_new_game(&mut self) {
        if self.puzzle.confirm_new_game {
            self.start_round();
        }
    }

    pub fn cancel_new_game(&mut self) {
        dispatch_mvi!(self, puzzle, PuzzleReducer, PuzzleIntent::CancelNewGame);
    }

    pub fn move_board(&mut self, intent: BoardIntent) {
        dispatch_mvi!(self, board, BoardReducer, intent);
    }

    pub fn send_selected(&mut self) {
        if let Some(letter) = self.board.selected() {
            self.send_letter(letter);
        }
    }

    /// Relay a letter. Repeats are sent too; the display drops re-guesses
    /// within a round. `sent` only drives highlighting.
    fn send_letter(&mut self, letter: Letter) {
        if self.send_command(UiCommand::SendGuess { letter }) {
            dispatch_mvi!(self, board, BoardReducer, BoardIntent::Sent { letter });
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_relay_error = Some("Relay not connected".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_relay_error = None;
                true
            }
            Err(err) => {
                self.last_relay_error = Some(format!("Relay send failed: {}", err));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;

    fn app(role: Role, quotes: Vec<Quote>) -> App {
        App::new(role, PuzzleEngine::with_seed(EngineConfig::default(), 7), quotes, "demo")
    }

    #[test]
    fn solo_keys_guess_case_insensitively() {
        let mut app = app(Role::Solo, vec![Quote::new("Hi", "Y")]);
        app.start_round();
        app.guess_key('h');
        app.guess_key('i');
        assert_eq!(app.phase(), RoundPhase::Won);
    }

    #[test]
    fn non_letter_key_shows_notice_and_keeps_round() {
        let mut app = app(Role::Solo, vec![Quote::new("Hi", "Y")]);
        app.start_round();
        let before = app.puzzle().round.clone();
        app.guess_key('7');
        assert_eq!(app.puzzle().round, before);
        assert!(app.puzzle().notice.as_deref().unwrap_or("").contains("Invalid letter"));
    }

    #[test]
    fn new_game_requires_confirmation() {
        let mut app = app(Role::Solo, vec![Quote::new("Hi", "Y")]);
        app.start_round();
        app.guess_key('H');
        app.request_new_game();
        assert!(app.awaiting_confirmation());
        assert_eq!(app.puzzle().round.as_ref().map(|r| r.guesses().len()), Some(1));

        app.cancel_new_game();
        assert!(!app.awaiting_confirmation());
        app.confirm_new_game();
        assert_eq!(app.puzzle().round.as_ref().map(|r| r.guesses().len()), Some(1));

        app.request_new_game();
        app.confirm_new_game();
        assert!(!app.awaiting_confirmation());
        assert_eq!(app.puzzle().round.as_ref().map(|r| r.guesses().len()), Some(0));
    }

    #[test]
    fn no_eligible_quotes_is_surfaced() {
        let mut app = app(Role::Solo, vec![Quote::new("x".repeat(41), "Y")]);
        app.start_round();
        assert_eq!(app.phase(), RoundPhase::NotStarted);
        assert!(app.puzzle().notice.as_deref().unwrap_or("").contains("No eligible quotes"));
    }

    #[test]
    fn relayed_guess_only_applies_on_display() {
        let letter = Letter::new('H').unwrap();
        let mut solo = app(Role::Solo, vec![Quote::new("Hi", "Y")]);
        solo.start_round();
        solo.on_relay_guess(letter);
        assert_eq!(solo.puzzle().round.as_ref().map(|r| r.guesses().len()), Some(0));

        let mut display = app(Role::Display, vec![Quote::new("Hi", "Y")]);
        display.start_round();
        display.on_relay_guess(letter);
        display.on_relay_guess(letter);
        assert_eq!(display.puzzle().round.as_ref().map(|r| r.guesses().len()), Some(1));
    }

    #[test]
    fn controller_resends_letters_from_earlier_rounds() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = app(Role::Controller, Vec::new());
        app.attach_commands(tx);

        app.guess_key('q');
        app.move_board(BoardIntent::MoveRight);
        app.send_selected();
        app.guess_key('Q');

        let sent: Vec<char> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|UiCommand::SendGuess { letter }| letter.as_char())
            .collect();
        assert_eq!(sent, vec!['Q', 'R', 'Q']);
        assert_eq!(app.board().sent.len(), 2);
        assert_eq!(app.last_relay_error(), None);
    }

    #[test]
    fn relayed_guess_during_new_game_prompt_is_applied() {
        let mut app = app(Role::Display, vec![Quote::new("Hi", "Y")]);
        app.start_round();
        app.request_new_game();
        app.on_relay_guess(Letter::new('H').unwrap());
        app.cancel_new_game();

        let round = app.puzzle().round.as_ref().unwrap();
        assert_eq!(round.guesses().len(), 1);
        assert_eq!(round.revealed_text(), "H_");
    }

    #[test]
    fn controller_ignores_non_letter_keys() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut app = app(Role::Controller, Vec::new());
        app.attach_commands(tx);

        app.guess_key('7');
        app.guess_key(' ');
        assert!(rx.try_recv().is_err());
        assert!(app.board().sent.is_empty());
    }

    #[test]
    fn controller_without_relay_reports_error() {
        let mut app = app(Role::Controller, Vec::new());
        app.guess_key('a');
        assert_eq!(app.last_relay_error(), Some("Relay not connected"));
        assert!(app.board().sent.is_empty());
    }
}
