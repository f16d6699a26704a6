//! Create/edit forms for the three record types.

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use thiserror::Error;

use crate::model::{
    Assignment, Driver, LicenseType, NewAssignment, NewDriver, NewTruck, ResourceKind, Truck,
};
use crate::store::token::RequestToken;
use crate::store::AppState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_WARNING,
};
use crate::ui::views::list::DATE_FORMAT;
use crate::worker::Request;

/// Why a form could not be submitted. The message is shown verbatim as a
/// warning notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields!")]
    MissingFields,
    #[error("Please enter a valid date (YYYY-MM-DD)")]
    InvalidDate,
    #[error("Please select a valid license type")]
    InvalidLicense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    /// One of [`LicenseType::ALL`].
    License,
    /// Id of a loaded driver.
    Driver,
    /// Id of a loaded truck.
    Truck,
}

impl FieldKind {
    pub fn is_choice(self) -> bool {
        matches!(self, FieldKind::License | FieldKind::Driver | FieldKind::Truck)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            label,
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    kind: ResourceKind,
    mode: FormMode,
    fields: Vec<Field>,
    focused: usize,
    submitting: Option<RequestToken>,
}

impl FormView {
    fn new(kind: ResourceKind, mode: FormMode, fields: Vec<Field>) -> Self {
        Self {
            kind,
            mode,
            fields,
            focused: 0,
            submitting: None,
        }
    }

    pub fn add_driver() -> Self {
        Self::new(
            ResourceKind::Driver,
            FormMode::Create,
            vec![
                Field::new("Name", FieldKind::Text, ""),
                Field::new("License type", FieldKind::License, ""),
            ],
        )
    }

    pub fn edit_driver(driver: &Driver) -> Self {
        Self::new(
            ResourceKind::Driver,
            FormMode::Edit {
                id: driver.id.clone(),
            },
            vec![
                Field::new("Name", FieldKind::Text, driver.name.as_str()),
                Field::new("License type", FieldKind::License, driver.license_type.as_str()),
            ],
        )
    }

    pub fn add_truck() -> Self {
        Self::new(
            ResourceKind::Truck,
            FormMode::Create,
            vec![
                Field::new("Plate", FieldKind::Text, ""),
                Field::new("Min. license type", FieldKind::License, ""),
            ],
        )
    }

    pub fn edit_truck(truck: &Truck) -> Self {
        Self::new(
            ResourceKind::Truck,
            FormMode::Edit {
                id: truck.id.clone(),
            },
            vec![
                Field::new("Plate", FieldKind::Text, truck.plate.as_str()),
                Field::new(
                    "Min. license type",
                    FieldKind::License,
                    truck.min_license_type.as_str(),
                ),
            ],
        )
    }

    pub fn add_assignment() -> Self {
        Self::new(
            ResourceKind::Assignment,
            FormMode::Create,
            vec![
                Field::new("Driver", FieldKind::Driver, ""),
                Field::new("Truck", FieldKind::Truck, ""),
                Field::new("Date", FieldKind::Date, ""),
            ],
        )
    }

    pub fn edit_assignment(assignment: &Assignment) -> Self {
        Self::new(
            ResourceKind::Assignment,
            FormMode::Edit {
                id: assignment.id.clone(),
            },
            vec![
                Field::new("Driver", FieldKind::Driver, assignment.driver_id.as_str()),
                Field::new("Truck", FieldKind::Truck, assignment.truck_id.as_str()),
                Field::new(
                    "Date",
                    FieldKind::Date,
                    assignment.date.format(DATE_FORMAT).to_string(),
                ),
            ],
        )
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focused)
    }

    pub fn title(&self) -> String {
        let verb = match self.mode {
            FormMode::Create => "Add",
            FormMode::Edit { .. } => "Edit",
        };
        format!("{} {}", verb, self.kind.label())
    }

    pub fn submitting(&self) -> Option<RequestToken> {
        self.submitting
    }

    pub fn set_submitting(&mut self, token: Option<RequestToken>) {
        self.submitting = token;
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len().max(1);
    }

    pub fn focus_prev(&mut self) {
        let len = self.fields.len().max(1);
        self.focused = (self.focused + len - 1) % len;
    }

    pub fn value(&self, kind: FieldKind) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.value.as_str())
    }

    /// Set the first field of `kind`.
    pub fn set_value(&mut self, kind: FieldKind, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.kind == kind) {
            field.value = value.into();
        }
    }

    /// Type into the focused field. License fields take a category letter.
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        match field.kind {
            FieldKind::Text | FieldKind::Date => field.value.push(c),
            FieldKind::License => {
                if let Ok(license) = c.to_string().parse::<LicenseType>() {
                    field.value = license.as_str().to_string();
                }
            }
            FieldKind::Driver | FieldKind::Truck => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if field.kind.is_choice() {
                field.value.clear();
            } else {
                field.value.pop();
            }
        }
    }

    /// Step the focused choice field through `options`. An empty field
    /// starts at the first (or last) option.
    pub fn cycle(&mut self, forward: bool, options: &[String]) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        if !field.kind.is_choice() || options.is_empty() {
            return;
        }
        let len = options.len();
        let next = match options.iter().position(|o| *o == field.value) {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        field.value = options[next].clone();
    }

    /// Validate the fields and turn them into a create or update request.
    pub fn build_request(&self) -> Result<Request, FormError> {
        if self.fields.iter().any(|f| f.value.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        let text = |kind| self.value(kind).map(str::trim).unwrap_or_default().to_string();
        let license = || {
            text(FieldKind::License)
                .parse::<LicenseType>()
                .map_err(|_| FormError::InvalidLicense)
        };

        let request = match (self.kind, &self.mode) {
            (ResourceKind::Driver, FormMode::Create) => Request::CreateDriver(NewDriver {
                name: text(FieldKind::Text),
                license_type: license()?,
            }),
            (ResourceKind::Driver, FormMode::Edit { id }) => Request::UpdateDriver(Driver {
                id: id.clone(),
                name: text(FieldKind::Text),
                license_type: license()?,
            }),
            (ResourceKind::Truck, FormMode::Create) => Request::CreateTruck(NewTruck {
                plate: text(FieldKind::Text),
                min_license_type: license()?,
            }),
            (ResourceKind::Truck, FormMode::Edit { id }) => Request::UpdateTruck(Truck {
                id: id.clone(),
                plate: text(FieldKind::Text),
                min_license_type: license()?,
            }),
            (ResourceKind::Assignment, mode) => {
                let date = NaiveDate::parse_from_str(&text(FieldKind::Date), DATE_FORMAT)
                    .map_err(|_| FormError::InvalidDate)?;
                let driver_id = text(FieldKind::Driver);
                let truck_id = text(FieldKind::Truck);
                match mode {
                    FormMode::Create => Request::CreateAssignment(NewAssignment {
                        driver_id,
                        truck_id,
                        date,
                    }),
                    FormMode::Edit { id } => Request::UpdateAssignment(Assignment {
                        id: id.clone(),
                        driver_id,
                        truck_id,
                        date,
                        driver_name: None,
                        truck_plate: None,
                        driver_license_type: None,
                    }),
                }
            }
        };
        Ok(request)
    }

    /// Advisory shown when the chosen driver's license does not cover the
    /// chosen truck. Submission is still allowed.
    pub fn license_advisory(&self, state: &AppState) -> Option<String> {
        if self.kind != ResourceKind::Assignment {
            return None;
        }
        let driver = state.drivers().find(self.value(FieldKind::Driver)?)?;
        let truck = state.trucks().find(self.value(FieldKind::Truck)?)?;
        if driver.license_type.covers(truck.min_license_type) {
            return None;
        }
        Some(format!(
            "{} holds license {} but truck {} requires {}",
            driver.name, driver.license_type, truck.plate, truck.min_license_type
        ))
    }
}

/// Choices for a choice field, as stored values.
pub fn choice_options(kind: FieldKind, state: &AppState) -> Vec<String> {
    match kind {
        FieldKind::License => LicenseType::ALL
            .iter()
            .map(|l| l.as_str().to_string())
            .collect(),
        FieldKind::Driver => state.drivers().items().iter().map(|d| d.id.clone()).collect(),
        FieldKind::Truck => state.trucks().items().iter().map(|t| t.id.clone()).collect(),
        FieldKind::Text | FieldKind::Date => Vec::new(),
    }
}

fn display_value(field: &Field, state: &AppState) -> String {
    if field.value.is_empty() {
        return match field.kind {
            FieldKind::Text => String::new(),
            FieldKind::Date => "YYYY-MM-DD".to_string(),
            FieldKind::License => "Select license type".to_string(),
            FieldKind::Driver => "Select driver".to_string(),
            FieldKind::Truck => "Select truck".to_string(),
        };
    }
    match field.kind {
        FieldKind::Driver => state
            .drivers()
            .find(&field.value)
            .map(|d| format!("{} ({})", d.name, d.license_type))
            .unwrap_or_else(|| field.value.clone()),
        FieldKind::Truck => state
            .trucks()
            .find(&field.value)
            .map(|t| format!("{} (min {})", t.plate, t.min_license_type))
            .unwrap_or_else(|| field.value.clone()),
        _ => field.value.clone(),
    }
}

pub fn render_form(frame: &mut Frame, area: Rect, form: &FormView, state: &AppState) {
    let [title_area, fields_area, advisory_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", form.title()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );

    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);
    let lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let focused = idx == form.focused;
            let value_style = if field.value.is_empty() {
                Style::default().fg(HEADER_SEPARATOR)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            let mut spans = vec![
                Span::styled(
                    format!(" {:<width$}  ", field.label, width = label_width),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(display_value(field, state), value_style),
            ];
            if focused {
                spans.push(Span::styled(
                    if field.kind.is_choice() { "  ◀ ▶" } else { "_" },
                    Style::default().fg(ACCENT),
                ));
            }
            let line = Line::from(spans);
            if focused {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    let status = if form.submitting.is_some() {
        " Saving..."
    } else {
        ""
    };
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(status),
        ),
        fields_area,
    );

    if let Some(advisory) = form.license_advisory(state) {
        frame.render_widget(
            Paragraph::new(format!(" ⚠ {advisory}")).style(Style::default().fg(STATUS_WARNING)),
            advisory_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_blocks_submit() {
        let mut form = FormView::add_driver();
        for c in "Ana".chars() {
            form.input_char(c);
        }
        assert_eq!(form.build_request(), Err(FormError::MissingFields));

        form.focus_next();
        form.input_char('c');
        assert_eq!(
            form.build_request(),
            Ok(Request::CreateDriver(NewDriver {
                name: "Ana".into(),
                license_type: LicenseType::C,
            }))
        );
    }

    #[test]
    fn assignment_date_must_parse() {
        let mut form = FormView::add_assignment();
        form.set_value(FieldKind::Driver, "d1");
        form.set_value(FieldKind::Truck, "t1");
        form.set_value(FieldKind::Date, "2024-02-30");
        assert_eq!(form.build_request(), Err(FormError::InvalidDate));
        assert_eq!(
            FormError::InvalidDate.to_string(),
            "Please enter a valid date (YYYY-MM-DD)"
        );
    }

    #[test]
    fn cycle_wraps_through_options() {
        let mut form = FormView::add_truck();
        form.focus_next();
        let options: Vec<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
        form.cycle(false, &options);
        assert_eq!(form.value(FieldKind::License), Some("B"));
        form.cycle(true, &options);
        assert_eq!(form.value(FieldKind::License), Some("A"));
    }
}
