//! Composition root of the console: routes, per-screen view state and the
//! glue between key presses, the store and the worker.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::config::UiConfig;
use crate::model::ResourceKind;
use crate::store::delete_confirmation::{DeleteConfirmationIntent, DeleteConfirmationState};
use crate::store::menu::MenuIntent;
use crate::store::notifications::{Notification, NotificationIntent};
use crate::store::token::{RequestScope, RequestToken};
use crate::store::{Action, AppState, Store};
use crate::ui::views::form::{choice_options, FormView};
use crate::ui::views::list::ListView;
use crate::worker::{Command, CommandSender, Completion, Request};

/// Top-level destinations reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    List(ResourceKind),
}

pub const MENU_ENTRIES: [(&str, Screen); 4] = [
    ("Home", Screen::Home),
    ("Drivers", Screen::List(ResourceKind::Driver)),
    ("Trucks", Screen::List(ResourceKind::Truck)),
    ("Assignments", Screen::List(ResourceKind::Assignment)),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    List(ListView),
    Form(FormView),
}

pub struct App {
    store: Store,
    route: Route,
    /// List requests issued by the current route.
    scope: RequestScope,
    /// Create/update/delete requests still in flight. These always commit.
    mutations: HashSet<RequestToken>,
    commands: CommandSender,
    notification_ttl: Duration,
    menu_selection: usize,
    home_selection: usize,
    should_quit: bool,
}

impl App {
    pub fn new(commands: CommandSender, config: &UiConfig) -> Self {
        Self {
            store: Store::new(),
            route: Route::Home,
            scope: RequestScope::default(),
            mutations: HashSet::new(),
            commands,
            notification_ttl: Duration::from_secs(config.notification_ttl_seconds),
            menu_selection: 0,
            home_selection: 0,
            should_quit: false,
        }
    }

    /// Mount the initial route.
    pub fn start(&mut self) {
        self.mount();
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn title(&self) -> String {
        match &self.route {
            Route::Home => "Home".to_string(),
            Route::List(view) => view.kind().title().to_string(),
            Route::Form(form) => form.title(),
        }
    }

    pub fn list_view(&self) -> Option<&ListView> {
        match &self.route {
            Route::List(view) => Some(view),
            _ => None,
        }
    }

    pub fn list_view_mut(&mut self) -> Option<&mut ListView> {
        match &mut self.route {
            Route::List(view) => Some(view),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&FormView> {
        match &self.route {
            Route::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormView> {
        match &mut self.route {
            Route::Form(form) => Some(form),
            _ => None,
        }
    }

    // --- navigation ---

    pub fn open_screen(&mut self, screen: Screen) {
        let route = match screen {
            Screen::Home => Route::Home,
            Screen::List(kind) => Route::List(ListView::new(kind)),
        };
        self.navigate(route);
    }

    pub fn open_form(&mut self, form: FormView) {
        self.navigate(Route::Form(form));
    }

    /// Leave a form for the list it belongs to.
    pub fn close_form(&mut self) {
        if let Route::Form(form) = &self.route {
            let kind = form.kind();
            self.open_screen(Screen::List(kind));
        }
    }

    fn navigate(&mut self, route: Route) {
        self.leave();
        tracing::debug!(from = %self.title(), "navigate");
        self.route = route;
        self.mount();
    }

    /// Cancel the list requests the outgoing route issued. Their slices go
    /// back to idle so the next screen fetches again.
    fn leave(&mut self) {
        for (token, kind) in self.scope.drain() {
            if self.commands.try_send(Command::Cancel(token)).is_err() {
                tracing::debug!(token = token.value(), "worker gone, cancel not sent");
            }
            self.store.dispatch(Action::fetch_cancelled(kind, token));
        }
    }

    fn mount(&mut self) {
        let (always, when_idle) = match &self.route {
            Route::Home => (ResourceKind::ALL.to_vec(), Vec::new()),
            Route::List(view) => (Vec::new(), vec![view.kind()]),
            Route::Form(form) if form.kind() == ResourceKind::Assignment => (
                Vec::new(),
                vec![ResourceKind::Driver, ResourceKind::Truck],
            ),
            Route::Form(_) => (Vec::new(), Vec::new()),
        };
        for kind in always {
            self.fetch(kind);
        }
        for kind in when_idle {
            self.fetch_if_idle(kind);
        }
    }

    fn fetch_if_idle(&mut self, kind: ResourceKind) {
        let idle = match kind {
            ResourceKind::Driver => self.state().drivers().is_idle(),
            ResourceKind::Truck => self.state().trucks().is_idle(),
            ResourceKind::Assignment => self.state().assignments().is_idle(),
        };
        if idle {
            self.fetch(kind);
        }
    }

    fn fetch(&mut self, kind: ResourceKind) {
        let token = self.store.next_token();
        if self.send(token, Request::List(kind)) {
            self.scope.track(token, kind);
            self.store.dispatch(Action::fetch_started(kind, token));
        }
    }

    /// Re-list the collection shown on the current list screen.
    pub fn refresh(&mut self) {
        if let Some(kind) = self.list_view().map(ListView::kind) {
            self.fetch(kind);
        }
    }

    fn send(&mut self, token: RequestToken, request: Request) -> bool {
        match self.commands.try_send(Command::Run { token, request }) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "worker did not accept request");
                self.notify(Notification::error("Could not start the request, please retry."));
                false
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.store
            .dispatch(Action::Notification(NotificationIntent::Push(notification)));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.notify(Notification::warning(message));
    }

    // --- worker events ---

    /// Apply a finished request. List results from routes that were left
    /// are dropped; mutation results always apply.
    pub fn on_completion(&mut self, completion: Completion) {
        let Completion { token, outcome } = completion;
        if !self.scope.release(token) && !self.mutations.remove(&token) {
            tracing::debug!(token = token.value(), "dropping stale completion");
            return;
        }

        let succeeded = outcome.succeeded;
        self.store.dispatch_all(outcome.actions);

        let submitted = self
            .form()
            .is_some_and(|form| form.submitting() == Some(token));
        if !submitted {
            return;
        }
        if succeeded {
            self.close_form();
        } else if let Some(form) = self.form_mut() {
            form.set_submitting(None);
        }
    }

    /// Close the most recent toast.
    pub fn dismiss_notification(&mut self) {
        if let Some(id) = self.state().notifications().latest().map(|n| n.id) {
            self.store
                .dispatch(Action::Notification(NotificationIntent::Dismiss(id)));
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.state().notifications().is_empty() {
            return;
        }
        self.store
            .dispatch(Action::Notification(NotificationIntent::Expire {
                now,
                ttl: self.notification_ttl,
            }));
    }

    // --- menu ---

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    /// Menu entry the current route belongs to.
    pub fn active_menu_entry(&self) -> usize {
        let kind = match &self.route {
            Route::Home => return 0,
            Route::List(view) => view.kind(),
            Route::Form(form) => form.kind(),
        };
        MENU_ENTRIES
            .iter()
            .position(|(_, screen)| *screen == Screen::List(kind))
            .unwrap_or(0)
    }

    pub fn open_menu(&mut self) {
        self.menu_selection = self.active_menu_entry();
        self.store.dispatch(Action::Menu(MenuIntent::Open));
    }

    pub fn close_menu(&mut self) {
        self.store.dispatch(Action::Menu(MenuIntent::Close));
    }

    pub fn menu_move(&mut self, delta: isize) {
        let len = MENU_ENTRIES.len();
        self.menu_selection =
            (self.menu_selection as isize + delta).rem_euclid(len as isize) as usize;
    }

    pub fn menu_activate(&mut self) {
        let screen = MENU_ENTRIES[self.menu_selection.min(MENU_ENTRIES.len() - 1)].1;
        self.close_menu();
        self.open_screen(screen);
    }

    // --- home ---

    pub fn home_selection(&self) -> usize {
        self.home_selection
    }

    pub fn home_move(&mut self, delta: isize) {
        let len = ResourceKind::ALL.len() as isize;
        self.home_selection = (self.home_selection as isize + delta).rem_euclid(len) as usize;
    }

    pub fn home_activate(&mut self) {
        let kind = ResourceKind::ALL[self.home_selection.min(ResourceKind::ALL.len() - 1)];
        self.open_screen(Screen::List(kind));
    }

    // --- list ---

    fn visible_len(&self) -> usize {
        let Some(view) = self.list_view() else {
            return 0;
        };
        let state = self.state();
        match view.kind() {
            ResourceKind::Driver => view.visible(state.drivers()).len(),
            ResourceKind::Truck => view.visible(state.trucks()).len(),
            ResourceKind::Assignment => view.visible(state.assignments()).len(),
        }
    }

    fn total_pages(&self) -> usize {
        let Some(view) = self.list_view() else {
            return 0;
        };
        let state = self.state();
        match view.kind() {
            ResourceKind::Driver => view.total_pages(state.drivers()),
            ResourceKind::Truck => view.total_pages(state.trucks()),
            ResourceKind::Assignment => view.total_pages(state.assignments()),
        }
    }

    pub fn list_move(&mut self, delta: isize) {
        let visible = self.visible_len();
        if let Some(view) = self.list_view_mut() {
            view.move_selection(delta, visible);
        }
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if let Some(view) = self.list_view_mut() {
            view.next_page(total);
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(view) = self.list_view_mut() {
            view.prev_page();
        }
    }

    /// Jump to one of the page buttons.
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        if page == 0 || page > total {
            return;
        }
        if let Some(view) = self.list_view_mut() {
            view.set_page(page);
        }
    }

    /// Id of the highlighted row on the current list page.
    pub fn selected_id(&self) -> Option<String> {
        let view = self.list_view()?;
        let state = self.state();
        match view.kind() {
            ResourceKind::Driver => view.selected_record(state.drivers()).map(|r| r.id),
            ResourceKind::Truck => view.selected_record(state.trucks()).map(|r| r.id),
            ResourceKind::Assignment => view.selected_record(state.assignments()).map(|r| r.id),
        }
    }

    pub fn add_new(&mut self) {
        let form = match self.list_view().map(ListView::kind) {
            Some(ResourceKind::Driver) => FormView::add_driver(),
            Some(ResourceKind::Truck) => FormView::add_truck(),
            Some(ResourceKind::Assignment) => FormView::add_assignment(),
            None => return,
        };
        self.open_form(form);
    }

    pub fn edit_selected(&mut self) {
        let Some(view) = self.list_view() else {
            return;
        };
        let state = self.state();
        let form = match view.kind() {
            ResourceKind::Driver => view
                .selected_record(state.drivers())
                .map(|r| FormView::edit_driver(&r)),
            ResourceKind::Truck => view
                .selected_record(state.trucks())
                .map(|r| FormView::edit_truck(&r)),
            ResourceKind::Assignment => view
                .selected_record(state.assignments())
                .map(|r| FormView::edit_assignment(&r)),
        };
        if let Some(form) = form {
            self.open_form(form);
        }
    }

    // --- delete confirmation ---

    /// Ask for confirmation before deleting the highlighted row.
    pub fn request_delete(&mut self) {
        let Some(kind) = self.list_view().map(ListView::kind) else {
            return;
        };
        if let Some(id) = self.selected_id() {
            self.store
                .dispatch(Action::DeleteConfirmation(DeleteConfirmationIntent::Open {
                    id,
                    kind,
                }));
        }
    }

    /// Send the delete and close the dialog without waiting for the result.
    pub fn confirm_delete(&mut self) {
        if let DeleteConfirmationState::Open { id, kind } = self.state().delete_confirmation() {
            let request = Request::Delete {
                kind: *kind,
                id: id.clone(),
            };
            let token = self.store.next_token();
            if self.send(token, request) {
                self.mutations.insert(token);
            }
        }
        self.cancel_delete();
    }

    pub fn cancel_delete(&mut self) {
        self.store
            .dispatch(Action::DeleteConfirmation(DeleteConfirmationIntent::Close));
    }

    // --- form ---

    /// Step the focused choice field of the form.
    pub fn form_cycle(&mut self, forward: bool) {
        let Some(kind) = self.form().and_then(|f| f.focused_field()).map(|f| f.kind) else {
            return;
        };
        let options = choice_options(kind, self.store.state());
        if let Some(form) = self.form_mut() {
            form.cycle(forward, &options);
        }
    }

    pub fn submit_form(&mut self) {
        let Some(form) = self.form() else {
            return;
        };
        if form.submitting().is_some() {
            return;
        }
        let request = match form.build_request() {
            Ok(request) => request,
            Err(err) => {
                self.warn(err.to_string());
                return;
            }
        };
        let token = self.store.next_token();
        if self.send(token, request) {
            self.mutations.insert(token);
            if let Some(form) = self.form_mut() {
                form.set_submitting(Some(token));
            }
        }
    }
}
