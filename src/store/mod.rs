//! Process-wide application state.
//!
//! [`Store`] owns one [`AppState`] made of independent slices. The only way to
//! change a slice is [`Store::dispatch`], which runs the slice's reducer on
//! the current value and stores the result.

pub mod delete_confirmation;
pub mod menu;
pub mod mvi;
pub mod notifications;
pub mod ops;
pub mod resource;
pub mod token;

use crate::model::{Assignment, Driver, Resource, ResourceKind, Truck};
use delete_confirmation::{
    DeleteConfirmationIntent, DeleteConfirmationReducer, DeleteConfirmationState,
};
use menu::{MenuIntent, MenuReducer, MenuState};
use mvi::{Intent, Reducer, UiState};
use notifications::{NotificationIntent, NotificationReducer, NotificationState};
use resource::{ResourceIntent, ResourceReducer, ResourceState, Status};
use token::{RequestToken, TokenSource};

/// Every slice of the console, composed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    drivers: ResourceState<Driver>,
    trucks: ResourceState<Truck>,
    assignments: ResourceState<Assignment>,
    menu: MenuState,
    delete_confirmation: DeleteConfirmationState,
    notifications: NotificationState,
}

impl UiState for AppState {}

impl AppState {
    pub fn drivers(&self) -> &ResourceState<Driver> {
        &self.drivers
    }

    pub fn trucks(&self) -> &ResourceState<Truck> {
        &self.trucks
    }

    pub fn assignments(&self) -> &ResourceState<Assignment> {
        &self.assignments
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn delete_confirmation(&self) -> &DeleteConfirmationState {
        &self.delete_confirmation
    }

    pub fn notifications(&self) -> &NotificationState {
        &self.notifications
    }

    pub fn slice<R: StoreSlice>(&self) -> &ResourceState<R> {
        R::slice(self)
    }

    pub fn status(&self, kind: ResourceKind) -> Status {
        match kind {
            ResourceKind::Driver => self.drivers.status(),
            ResourceKind::Truck => self.trucks.status(),
            ResourceKind::Assignment => self.assignments.status(),
        }
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Driver => self.drivers.items().len(),
            ResourceKind::Truck => self.trucks.items().len(),
            ResourceKind::Assignment => self.assignments.items().len(),
        }
    }
}

/// Tagged union of all slice intents.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Drivers(ResourceIntent<Driver>),
    Trucks(ResourceIntent<Truck>),
    Assignments(ResourceIntent<Assignment>),
    Menu(MenuIntent),
    DeleteConfirmation(DeleteConfirmationIntent),
    Notification(NotificationIntent),
}

impl Intent for Action {}

impl Action {
    /// `FetchCancelled` for the slice of `kind`.
    pub fn fetch_cancelled(kind: ResourceKind, token: RequestToken) -> Self {
        match kind {
            ResourceKind::Driver => Action::Drivers(ResourceIntent::FetchCancelled { token }),
            ResourceKind::Truck => Action::Trucks(ResourceIntent::FetchCancelled { token }),
            ResourceKind::Assignment => {
                Action::Assignments(ResourceIntent::FetchCancelled { token })
            }
        }
    }

    pub fn fetch_started(kind: ResourceKind, token: RequestToken) -> Self {
        match kind {
            ResourceKind::Driver => Action::Drivers(ResourceIntent::FetchStarted { token }),
            ResourceKind::Truck => Action::Trucks(ResourceIntent::FetchStarted { token }),
            ResourceKind::Assignment => Action::Assignments(ResourceIntent::FetchStarted { token }),
        }
    }
}

/// A resource type with a slice in [`AppState`].
pub trait StoreSlice: Resource {
    fn action(intent: ResourceIntent<Self>) -> Action;

    fn slice(state: &AppState) -> &ResourceState<Self>;
}

impl StoreSlice for Driver {
    fn action(intent: ResourceIntent<Self>) -> Action {
        Action::Drivers(intent)
    }

    fn slice(state: &AppState) -> &ResourceState<Self> {
        &state.drivers
    }
}

impl StoreSlice for Truck {
    fn action(intent: ResourceIntent<Self>) -> Action {
        Action::Trucks(intent)
    }

    fn slice(state: &AppState) -> &ResourceState<Self> {
        &state.trucks
    }
}

impl StoreSlice for Assignment {
    fn action(intent: ResourceIntent<Self>) -> Action {
        Action::Assignments(intent)
    }

    fn slice(state: &AppState) -> &ResourceState<Self> {
        &state.assignments
    }
}

/// Runs a slice reducer on a field of `AppState` in place.
macro_rules! reduce_slice {
    ($state:ident, $field:ident, $reducer:ty, $intent:expr) => {
        $state.$field = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent)
    };
}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = Action;

    fn reduce(mut state: Self::State, action: Self::Intent) -> Self::State {
        match action {
            Action::Drivers(intent) => {
                reduce_slice!(state, drivers, ResourceReducer<Driver>, intent)
            }
            Action::Trucks(intent) => reduce_slice!(state, trucks, ResourceReducer<Truck>, intent),
            Action::Assignments(intent) => {
                reduce_slice!(state, assignments, ResourceReducer<Assignment>, intent)
            }
            Action::Menu(intent) => reduce_slice!(state, menu, MenuReducer, intent),
            Action::DeleteConfirmation(intent) => {
                reduce_slice!(state, delete_confirmation, DeleteConfirmationReducer, intent)
            }
            Action::Notification(intent) => {
                reduce_slice!(state, notifications, NotificationReducer, intent)
            }
        }
        state
    }
}

/// Owner of the application state. Created once at startup and passed by
/// reference to whoever renders or dispatches.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    tokens: TokenSource,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        self.state = AppReducer::reduce(std::mem::take(&mut self.state), action);
    }

    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    pub fn next_token(&mut self) -> RequestToken {
        self.tokens.issue()
    }
}
