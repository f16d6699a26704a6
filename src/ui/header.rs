use crate::model::ResourceKind;
use crate::store::resource::Status;
use crate::store::AppState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARNING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, state: &'a AppState) -> Self {
        Self { title, state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Fleet",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.title.to_string(), text_style),
        ];

        for kind in ResourceKind::ALL {
            let status = self.state.status(kind);
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(status_dot(status), Style::default().fg(status_color(status))));
            spans.push(Span::styled(
                format!(" {} {}", kind.plural(), self.state.count(kind)),
                text_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_dot(status: Status) -> &'static str {
    match status {
        Status::Idle => "○",
        _ => "●",
    }
}

fn status_color(status: Status) -> ratatui::style::Color {
    match status {
        Status::Idle => HEADER_SEPARATOR,
        Status::Loading => STATUS_WARNING,
        Status::Succeeded => STATUS_OK,
        Status::Failed => STATUS_ERROR,
    }
}
