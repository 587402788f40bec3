use crate::engine::{Letter, RoundPhase, RoundState};
use crate::ui::app::{App, Role};
use crate::ui::board::{BoardState, BOARD_COLUMNS};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const CONFIRM_TEXT: &str = "End this game and start a new one?";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let lines = match app.role() {
        Role::Controller => controller_lines(app),
        Role::Solo | Role::Display => puzzle_lines(app),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        inset(body),
    );

    frame.render_widget(Footer::new().widget(footer, app.role()), footer);

    if app.awaiting_confirmation() {
        draw_confirm_popup(frame, area);
    }
}

fn inset(body: Rect) -> Rect {
    Rect {
        y: body.y.saturating_add(1),
        height: body.height.saturating_sub(1),
        ..body
    }
}

fn puzzle_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.puzzle();
    let mut lines = Vec::new();

    match &state.round {
        Some(round) => {
            lines.push(quote_line(round));
            if round.phase().is_terminal() {
                lines.push(Line::from(Span::styled(
                    format!("— {}", round.quote_author()),
                    Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
                )));
            }
            lines.push(Line::from(""));
            lines.push(strike_line(round));
            lines.push(Line::from(""));
            lines.push(guessed_line(round));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                round.status_message().text(),
                status_style(round.phase()),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Waiting for a quote...",
            Style::default().fg(MUTED_TEXT),
        ))),
    }

    if let Some(notice) = &state.notice {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(STATUS_WARN),
        )));
    }
    if let Some(err) = app.last_relay_error() {
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines
}

/// The quote with one space between characters; revealed letters are
/// highlighted, and once the round is over unguessed letters show in red.
pub(crate) fn quote_line(round: &RoundState) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, ch) in round.current_quote().chars().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let shown = round.is_revealed(ch);
        let style = match Letter::new(ch) {
            Ok(letter) if round.has_guessed(letter) => {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            }
            Ok(_) if round.game_over() => Style::default().fg(STATUS_ERROR),
            _ => Style::default().fg(HEADER_TEXT),
        };
        spans.push(Span::styled(shown.to_string(), style));
    }
    Line::from(spans)
}

pub(crate) fn strike_line(round: &RoundState) -> Line<'static> {
    let symbols: Vec<&str> = round.strikes().iter().map(|s| s.icon.symbol()).collect();
    Line::from(symbols.join(" "))
}

/// Guessed letters in order; wrong ones struck through in red.
pub(crate) fn guessed_line(round: &RoundState) -> Line<'static> {
    let bad = round.bad_guesses();
    let mut spans = vec![Span::styled("Guessed: ", Style::default().fg(MUTED_TEXT))];
    for letter in round.guesses() {
        let style = if bad.contains(letter) {
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(STATUS_OK)
        };
        spans.push(Span::styled(format!("{} ", letter), style));
    }
    Line::from(spans)
}

fn status_style(phase: RoundPhase) -> Style {
    match phase {
        RoundPhase::Won => Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        RoundPhase::Lost => Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        RoundPhase::InProgress | RoundPhase::NotStarted => Style::default().fg(HEADER_TEXT),
    }
}

fn controller_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Guessing on /{}", app.channel()),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];
    lines.extend(board_lines(app.board()));
    if let Some(err) = app.last_relay_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines
}

pub(crate) fn board_lines(board: &BoardState) -> Vec<Line<'static>> {
    let letters: Vec<Letter> = Letter::alphabet().collect();
    letters
        .chunks(BOARD_COLUMNS)
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .map(|&letter| {
                    let mut style = if board.was_sent(letter) {
                        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
                    } else {
                        Style::default().fg(HEADER_TEXT)
                    };
                    if board.selected() == Some(letter) {
                        style = style.bg(ACTIVE_HIGHLIGHT).fg(ACCENT).add_modifier(Modifier::BOLD);
                    }
                    Span::styled(format!(" {} ", letter), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn draw_confirm_popup(frame: &mut Frame<'_>, area: Rect) {
    let width = (CONFIRM_TEXT.chars().count() as u16).saturating_add(6);
    let popup = centered_rect_by_size(area, width, 5);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(CONFIRM_TEXT),
        Line::from(Span::styled("(y/n)", Style::default().fg(MUTED_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" New game ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{submit_guess, EngineConfig, PuzzleEngine, Quote};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn round(quote: &str) -> RoundState {
        PuzzleEngine::with_seed(EngineConfig::default(), 0)
            .init_round(&[Quote::new(quote, "Anon")])
            .unwrap()
    }

    #[test]
    fn quote_is_spaced_and_masked() {
        let state = submit_guess(&round("Hi, yo"), 'H').unwrap();
        assert_eq!(text(&quote_line(&state)), "H _ ,   _ _");
    }

    #[test]
    fn strikes_fill_from_the_left() {
        let state = submit_guess(&round("Hi"), 'Z').unwrap();
        assert_eq!(text(&strike_line(&state)), "🚫 ⚪ ⚪");
    }

    #[test]
    fn guessed_line_lists_in_order() {
        let state = submit_guess(&round("Hi"), 'Z').unwrap();
        let state = submit_guess(&state, 'H').unwrap();
        assert_eq!(text(&guessed_line(&state)), "Guessed: Z H ");
    }

    #[test]
    fn board_has_three_rows() {
        let lines = board_lines(&BoardState::default());
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[2]), " S  T  U  V  W  X  Y  Z ");
    }

    fn app_with(quote: &str) -> App {
        App::new(
            Role::Solo,
            PuzzleEngine::with_seed(EngineConfig::default(), 0),
            vec![Quote::new(quote, "Anon")],
            "demo",
        )
    }

    #[test]
    fn author_appears_once_the_round_ends() {
        let mut app = app_with("Hi");
        app.start_round();
        let has_author = |app: &App| puzzle_lines(app).iter().any(|l| text(l).contains("Anon"));
        assert!(!has_author(&app));

        app.guess_key('H');
        assert!(!has_author(&app));
        app.guess_key('I');
        assert!(has_author(&app));

        let mut lost = app_with("Hi");
        lost.start_round();
        for ch in ['X', 'Y', 'Z'] {
            lost.guess_key(ch);
        }
        assert!(has_author(&lost));
    }

    #[test]
    fn confirm_popup_is_drawn() {
        let mut app = app_with("Hi");
        app.start_round();
        app.request_new_game();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains("End this game"));
    }
}
