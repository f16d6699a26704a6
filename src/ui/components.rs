use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::POPUP_BORDER;

/// Bordered, titled box drawn over whatever is underneath.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    fixed_width: Option<u16>,
    border: Color,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            fixed_width: None,
            border: POPUP_BORDER,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    /// Draw centered in `area`.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0);
        let title_width = self.title.chars().count();
        let width = self
            .fixed_width
            .unwrap_or((content_width.max(title_width) + 4) as u16);
        let height = self.lines.len() as u16 + 2;
        let rect = centered_rect_by_size(width, height, area);
        self.render_at(frame, rect);
    }

    pub fn render_at(self, frame: &mut Frame, rect: Rect) {
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(self.lines).block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.border)),
            ),
            rect,
        );
    }
}
