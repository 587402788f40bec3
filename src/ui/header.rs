use crate::ui::app::{App, Role};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_style) = match app.last_relay_error() {
            Some(_) => ("🔴", Style::default().fg(STATUS_ERROR)),
            None => ("🟢", Style::default().fg(STATUS_OK)),
        };

        let detail = match app.role() {
            Role::Controller => format!("sent {}/26", app.board().sent.len()),
            Role::Solo | Role::Display => format!("{} quotes", app.quote_count()),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(dot, dot_style),
            Span::styled("  ", text_style),
            Span::styled(app.role().label(), text_style),
        ];
        if app.role() != Role::Solo {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("/{}", app.channel()), text_style));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(detail, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
