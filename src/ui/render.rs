use crate::model::ResourceKind;
use crate::store::delete_confirmation::DeleteConfirmationState;
use crate::store::AppState;
use crate::ui::app::{App, Route, MENU_ENTRIES};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::views::form::render_form;
use crate::ui::views::home::render_home;
use crate::ui::views::list::{render_list, DATE_FORMAT};
use crate::ui::views::overlays::{render_delete_confirmation, render_menu, render_notifications};
use ratatui::layout::Margin;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    let title = app.title();
    frame.render_widget(Header::new(&title, state).widget(), header);
    frame.render_widget(Clear, body);

    let content = body.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    match app.route() {
        Route::Home => render_home(frame, content, state, app.home_selection()),
        Route::List(view) => match view.kind() {
            ResourceKind::Driver => render_list(frame, content, view, state.drivers()),
            ResourceKind::Truck => render_list(frame, content, view, state.trucks()),
            ResourceKind::Assignment => render_list(frame, content, view, state.assignments()),
        },
        Route::Form(form) => render_form(frame, content, form, state),
    }

    let footer_widget = Footer::new(hints(app));
    frame.render_widget(footer_widget.widget(footer), footer);

    if state.menu().is_open() {
        let labels: Vec<&str> = MENU_ENTRIES.iter().map(|(label, _)| *label).collect();
        render_menu(frame, body, &labels, app.menu_selection(), app.active_menu_entry());
    }
    if let DeleteConfirmationState::Open { id, kind } = state.delete_confirmation() {
        render_delete_confirmation(frame, area, &describe(state, *kind, id));
    }
    render_notifications(frame, body, state.notifications());
}

fn hints(app: &App) -> &'static str {
    let state = app.state();
    if state.delete_confirmation().is_open() {
        return "y/Enter: Delete │ n/Esc: Cancel";
    }
    if state.menu().is_open() {
        return "↑↓: Select │ Enter: Open │ Esc: Close";
    }
    match app.route() {
        Route::Home => "←→: Select │ Enter: Open │ x: Dismiss │ m: Menu │ q: Quit",
        Route::List(view) if view.filter_input().is_some() => {
            "Type YYYY-MM-DD │ Enter: Apply (empty clears) │ Esc: Cancel"
        }
        Route::List(view) if view.kind() == ResourceKind::Assignment => {
            "↑↓: Select │ ←→/1-9: Page │ a: Add │ e: Edit │ d: Delete │ r: Reload │ f: Filter │ c: Clear │ m: Menu │ q: Quit"
        }
        Route::List(_) => {
            "↑↓: Select │ ←→/1-9: Page │ a: Add │ e: Edit │ d: Delete │ r: Reload │ m: Menu │ q: Quit"
        }
        Route::Form(_) => "Tab: Next field │ ←→: Choose │ Enter: Save │ Esc: Back",
    }
}

/// One-line description of the record awaiting deletion.
fn describe(state: &AppState, kind: ResourceKind, id: &str) -> String {
    let found = match kind {
        ResourceKind::Driver => state
            .drivers()
            .find(id)
            .map(|d| format!("Driver {} (license {})", d.name, d.license_type)),
        ResourceKind::Truck => state
            .trucks()
            .find(id)
            .map(|t| format!("Truck {} (min. license {})", t.plate, t.min_license_type)),
        ResourceKind::Assignment => state.assignments().find(id).map(|a| {
            format!(
                "{} → {} on {}",
                a.driver_display(),
                a.truck_display(),
                a.date.format(DATE_FORMAT)
            )
        }),
    };
    found.unwrap_or_else(|| format!("{} {}", kind.label(), id))
}
