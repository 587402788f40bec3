use crate::ui::app::{App, Role};
use crate::ui::board::BoardIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.awaiting_confirmation() {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.confirm_new_game(),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => app.cancel_new_game(),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'n') {
        app.request_new_game();
        return;
    }

    if matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if app.role() == Role::Controller {
        match key.code {
            KeyCode::Left => return app.move_board(BoardIntent::MoveLeft),
            KeyCode::Right => return app.move_board(BoardIntent::MoveRight),
            KeyCode::Up => return app.move_board(BoardIntent::MoveUp),
            KeyCode::Down => return app.move_board(BoardIntent::MoveDown),
            KeyCode::Enter => return app.send_selected(),
            _ => {}
        }
    }

    if let KeyCode::Char(ch) = key.code {
        if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) && !ch.is_whitespace() {
            app.guess_key(ch);
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
