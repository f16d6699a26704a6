use std::collections::VecDeque;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::store::mvi::{Intent, Reducer, UiState};

/// Oldest notifications are dropped beyond this many.
pub const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    items: VecDeque<Notification>,
}

impl UiState for NotificationState {}

impl NotificationState {
    /// Visible notifications, oldest first.
    pub fn items(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationIntent {
    Push(Notification),
    Dismiss(Uuid),
    /// Drop everything created at least `ttl` before `now`.
    Expire { now: Instant, ttl: Duration },
}

impl Intent for NotificationIntent {}

pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Intent = NotificationIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Push(notification) => {
                state.items.push_back(notification);
                while state.items.len() > MAX_NOTIFICATIONS {
                    state.items.pop_front();
                }
            }
            NotificationIntent::Dismiss(id) => {
                state.items.retain(|n| n.id != id);
            }
            NotificationIntent::Expire { now, ttl } => {
                state
                    .items
                    .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
            }
        }
        state
    }
}
