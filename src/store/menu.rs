use crate::store::mvi::{Intent, Reducer, UiState};

/// Navigation overlay visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    is_open: bool,
}

impl UiState for MenuState {}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    Open,
    Close,
}

impl Intent for MenuIntent {}

pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuState;
    type Intent = MenuIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MenuIntent::Open => MenuState { is_open: true },
            MenuIntent::Close => MenuState { is_open: false },
        }
    }
}
