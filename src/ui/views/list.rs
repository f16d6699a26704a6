//! Paginated, optionally date-filtered tables.

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::model::{Assignment, Driver, ResourceKind, Truck};
use crate::store::resource::{ResourceState, Status};
use crate::store::StoreSlice;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rows per list page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` rows. Zero rows need zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Rows of the 1-based `page`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// A record that can be shown as one table row.
pub trait TableRow: StoreSlice {
    const HEADERS: &'static [&'static str];
    const WIDTHS: &'static [Constraint];

    fn cells(&self) -> Vec<String>;

    /// Date the date filter matches against. Records without one are never
    /// filtered out.
    fn date(&self) -> Option<NaiveDate> {
        None
    }
}

impl TableRow for Driver {
    const HEADERS: &'static [&'static str] = &["Name", "License"];
    const WIDTHS: &'static [Constraint] = &[Constraint::Fill(3), Constraint::Fill(1)];

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.license_type.to_string()]
    }
}

impl TableRow for Truck {
    const HEADERS: &'static [&'static str] = &["Plate", "Min. license"];
    const WIDTHS: &'static [Constraint] = &[Constraint::Fill(2), Constraint::Fill(1)];

    fn cells(&self) -> Vec<String> {
        vec![self.plate.clone(), self.min_license_type.to_string()]
    }
}

impl TableRow for Assignment {
    const HEADERS: &'static [&'static str] = &["Driver", "Truck", "Date"];
    const WIDTHS: &'static [Constraint] = &[
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(12),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.driver_display().to_string(),
            self.truck_display().to_string(),
            self.date.format(DATE_FORMAT).to_string(),
        ]
    }

    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

/// Per-mount state of a list screen. Recreated every time the screen is
/// entered, so page and filter do not survive navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    kind: ResourceKind,
    page: usize,
    selected: usize,
    date_filter: Option<NaiveDate>,
    filter_input: Option<String>,
}

impl ListView {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            page: 1,
            selected: 0,
            date_filter: None,
            filter_input: None,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.date_filter
    }

    /// Text being typed into the date filter, if the filter prompt is open.
    pub fn filter_input(&self) -> Option<&str> {
        self.filter_input.as_deref()
    }

    /// Jump to a page. The page is not clamped to the current row count.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.selected = 0;
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page < total {
            self.set_page(self.page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.set_page(self.page - 1);
        }
    }

    pub fn move_selection(&mut self, delta: isize, visible: usize) {
        if visible == 0 {
            self.selected = 0;
            return;
        }
        let max = visible - 1;
        self.selected = self.selected.min(max).saturating_add_signed(delta).min(max);
    }

    /// Highlighted row index, kept inside the `visible` rows of the page.
    pub fn selected_index(&self, visible: usize) -> Option<usize> {
        visible.checked_sub(1).map(|max| self.selected.min(max))
    }

    /// Changing the filter keeps the current page.
    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.date_filter = date;
        self.selected = 0;
    }

    pub fn open_filter_prompt(&mut self) {
        let current = self
            .date_filter
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        self.filter_input = Some(current);
    }

    pub fn filter_push(&mut self, c: char) {
        if let Some(input) = self.filter_input.as_mut() {
            if input.len() < DATE_FORMAT_LEN {
                input.push(c);
            }
        }
    }

    pub fn filter_backspace(&mut self) {
        if let Some(input) = self.filter_input.as_mut() {
            input.pop();
        }
    }

    pub fn cancel_filter_prompt(&mut self) {
        self.filter_input = None;
    }

    /// Apply the typed filter. An empty prompt clears the filter.
    pub fn commit_filter_prompt(&mut self) -> Result<(), chrono::ParseError> {
        let Some(input) = self.filter_input.take() else {
            return Ok(());
        };
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.set_date_filter(None);
            return Ok(());
        }
        match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            Ok(date) => {
                self.set_date_filter(Some(date));
                Ok(())
            }
            Err(err) => {
                self.filter_input = Some(input);
                Err(err)
            }
        }
    }

    /// Rows shown on the current page, after filtering.
    pub fn visible<R: TableRow>(&self, slice: &ResourceState<R>) -> Vec<R> {
        paginate(&self.filtered(slice), self.page, PAGE_SIZE).to_vec()
    }

    pub fn total_pages<R: TableRow>(&self, slice: &ResourceState<R>) -> usize {
        total_pages(self.filtered(slice).len(), PAGE_SIZE)
    }

    pub fn selected_record<R: TableRow>(&self, slice: &ResourceState<R>) -> Option<R> {
        let rows = self.visible(slice);
        let index = self.selected_index(rows.len())?;
        rows.into_iter().nth(index)
    }

    fn filtered<R: TableRow>(&self, slice: &ResourceState<R>) -> Vec<R> {
        let items = slice.items();
        match self.date_filter {
            Some(date) => items
                .iter()
                .filter(|record| record.date().is_none_or(|d| d == date))
                .cloned()
                .collect(),
            None => items.to_vec(),
        }
    }
}

const DATE_FORMAT_LEN: usize = 10;

pub fn empty_message(kind: ResourceKind) -> String {
    format!("No {} found", kind.plural())
}

pub fn render_list<R: TableRow>(
    frame: &mut Frame,
    area: Rect,
    view: &ListView,
    slice: &ResourceState<R>,
) {
    let [title_area, filter_area, table_area, pager_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(if view.kind == ResourceKind::Assignment { 1 } else { 0 }),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut title = vec![Span::styled(
        format!(" {}", view.kind.title()),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(error) = slice.error() {
        title.push(Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)));
        title.push(Span::styled(error.to_string(), Style::default().fg(STATUS_ERROR)));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    if view.kind == ResourceKind::Assignment {
        let filter = match (view.filter_input(), view.date_filter()) {
            (Some(input), _) => format!(" Filter by date: {input}_"),
            (None, Some(date)) => format!(" Filter by date: {}", date.format(DATE_FORMAT)),
            (None, None) => " Filter by date: (none)".to_string(),
        };
        frame.render_widget(
            Paragraph::new(filter).style(Style::default().fg(HEADER_TEXT)),
            filter_area,
        );
    }

    let rows = view.visible(slice);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if rows.is_empty() {
        let text = if slice.status() == Status::Loading {
            "Loading...".to_string()
        } else {
            empty_message(view.kind)
        };
        frame.render_widget(
            Paragraph::new(format!(" {text}"))
                .style(Style::default().fg(HEADER_TEXT))
                .block(block),
            table_area,
        );
    } else {
        let header = Row::new(R::HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));
        let highlighted = view.selected_index(rows.len());
        let body = rows.iter().enumerate().map(|(idx, record)| {
            let style = if Some(idx) == highlighted {
                Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Row::new(record.cells()).style(style)
        });
        frame.render_widget(
            Table::new(body, R::WIDTHS.iter().copied())
                .header(header)
                .block(block),
            table_area,
        );
    }

    let total = view.total_pages(slice);
    if total > 1 {
        let mut buttons = vec![Span::raw(" ")];
        for page in 1..=total {
            let style = if page == view.page {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(HEADER_SEPARATOR)
            };
            buttons.push(Span::styled(format!("[{page}]"), style));
            buttons.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(buttons)), pager_area);
    }
}
