use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::model::ResourceKind;
use crate::store::resource::Status;
use crate::store::AppState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT};

fn card_color(kind: ResourceKind) -> Color {
    match kind {
        ResourceKind::Driver => Color::Rgb(0x3b, 0x82, 0xf6),
        ResourceKind::Truck => Color::Rgb(0x22, 0xc5, 0x5e),
        ResourceKind::Assignment => Color::Rgb(0xef, 0x44, 0x44),
    }
}

/// Dashboard: one card per collection with its record count.
pub fn render_home(frame: &mut Frame, area: Rect, state: &AppState, selected: usize) {
    let [title_area, cards_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(5)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from("Manage Your Assignments"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::NONE)),
        title_area,
    );

    let cards = Layout::horizontal([Constraint::Fill(1); 3]).spacing(2).split(cards_area);
    for (idx, kind) in ResourceKind::ALL.into_iter().enumerate() {
        let count = match state.status(kind) {
            Status::Loading if state.count(kind) == 0 => "…".to_string(),
            _ => state.count(kind).to_string(),
        };
        let mut block = Block::default()
            .title(format!(" {} ", kind.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card_color(kind)));
        if idx == selected {
            block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(count).style(Style::default().add_modifier(Modifier::BOLD)),
            ])
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT))
            .block(block),
            cards[idx],
        );
    }
}
