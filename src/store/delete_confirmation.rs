use crate::model::ResourceKind;
use crate::store::mvi::{Intent, Reducer, UiState};

/// The single pending deletion awaiting the user's answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteConfirmationState {
    #[default]
    Closed,
    Open {
        id: String,
        kind: ResourceKind,
    },
}

impl UiState for DeleteConfirmationState {}

impl DeleteConfirmationState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn id_to_delete(&self) -> Option<&str> {
        match self {
            Self::Open { id, .. } => Some(id),
            Self::Closed => None,
        }
    }

    pub fn delete_type(&self) -> Option<ResourceKind> {
        match self {
            Self::Open { kind, .. } => Some(*kind),
            Self::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteConfirmationIntent {
    /// Ask for confirmation. Replaces any target already pending.
    Open { id: String, kind: ResourceKind },
    Close,
}

impl Intent for DeleteConfirmationIntent {}

pub struct DeleteConfirmationReducer;

impl Reducer for DeleteConfirmationReducer {
    type State = DeleteConfirmationState;
    type Intent = DeleteConfirmationIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeleteConfirmationIntent::Open { id, kind } => {
                DeleteConfirmationState::Open { id, kind }
            }
            DeleteConfirmationIntent::Close => DeleteConfirmationState::Closed,
        }
    }
}
