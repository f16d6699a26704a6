//! Menu, delete confirmation and notification toasts.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::store::notifications::{NotificationLevel, NotificationState};
use crate::ui::components::PopupDialog;
use crate::ui::layout::bottom_right_rect;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK, STATUS_WARNING,
};

const MENU_WIDTH: u16 = 28;
const CONFIRM_WIDTH: u16 = 56;
const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

/// Side panel on the right edge of `area`.
pub fn render_menu(frame: &mut Frame, area: Rect, entries: &[&str], selected: usize, active: usize) {
    let width = MENU_WIDTH.min(area.width);
    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    };

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let marker = if idx == active { "● " } else { "  " };
            let mut style = Style::default().fg(HEADER_TEXT);
            if idx == active {
                style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
            }
            if idx == selected {
                style = style.bg(ACTIVE_HIGHLIGHT);
            }
            Line::from(Span::styled(format!(" {marker}{entry}"), style))
        })
        .collect();

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        rect,
    );
}

pub fn render_delete_confirmation(frame: &mut Frame, area: Rect, target: &str) {
    let text = Style::default().fg(HEADER_TEXT);
    let lines = vec![
        Line::from(Span::styled(
            " ⚠ Confirm Deletion",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!(" {target}"), text)),
        Line::from(Span::styled(
            " Are you sure you want to delete this item?",
            text,
        )),
        Line::from(Span::styled(" This action cannot be undone.", text)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" [y] Yes, Delete", Style::default().fg(STATUS_ERROR)),
            Span::styled("   [n] Cancel", Style::default().fg(HEADER_SEPARATOR)),
        ]),
    ];
    PopupDialog::new("Delete", lines)
        .fixed_width(CONFIRM_WIDTH)
        .border_color(STATUS_ERROR)
        .render(frame, area);
}

/// Stack toasts upward from the lower-right corner of `area`, newest at the
/// bottom.
pub fn render_notifications(frame: &mut Frame, area: Rect, notifications: &NotificationState) {
    let oldest_first: Vec<_> = notifications.items().collect();
    for (idx, notification) in oldest_first.into_iter().rev().enumerate() {
        let offset = idx as u16 * TOAST_HEIGHT;
        if offset + TOAST_HEIGHT > area.height {
            break;
        }
        let rect = bottom_right_rect(TOAST_WIDTH, TOAST_HEIGHT, offset, area);

        let (icon, color) = match notification.level {
            NotificationLevel::Success => ("✔", STATUS_OK),
            NotificationLevel::Warning => ("!", STATUS_WARNING),
            NotificationLevel::Error => ("✖", STATUS_ERROR),
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(color)),
                Span::styled(notification.message.clone(), Style::default().fg(HEADER_TEXT)),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
    }
}
