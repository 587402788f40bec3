use crate::engine::Letter;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BoardIntent {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Jump the cursor to a letter (typed directly).
    Select { letter: Letter },
    /// The letter was handed to the relay.
    Sent { letter: Letter },
    /// Clear sent letters for a fresh round on the display.
    Reset,
}

impl Intent for BoardIntent {}
