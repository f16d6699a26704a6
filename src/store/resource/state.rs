use crate::model::Resource;
use crate::store::mvi::UiState;
use crate::store::token::RequestToken;

/// Lifecycle of the most recent list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Local mirror of one server collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<R> {
    pub(super) items: Vec<R>,
    pub(super) status: Status,
    pub(super) error: Option<String>,
    /// Token of the list request whose response may still be applied.
    pub(super) pending_fetch: Option<RequestToken>,
}

impl<R> Default for ResourceState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: Status::Idle,
            error: None,
            pending_fetch: None,
        }
    }
}

impl<R: Resource> UiState for ResourceState<R> {}

impl<R: Resource> ResourceState<R> {
    /// State after a successful list returning `items`.
    pub fn loaded(items: Vec<R>) -> Self {
        Self {
            items,
            status: Status::Succeeded,
            error: None,
            pending_fetch: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending_fetch(&self) -> Option<RequestToken> {
        self.pending_fetch
    }

    pub fn is_idle(&self) -> bool {
        self.status == Status::Idle
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }
}
