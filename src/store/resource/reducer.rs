use std::marker::PhantomData;

use crate::model::Resource;
use crate::store::mvi::Reducer;
use crate::store::resource::intent::ResourceIntent;
use crate::store::resource::state::{ResourceState, Status};

pub struct ResourceReducer<R>(PhantomData<R>);

impl<R: Resource> Reducer for ResourceReducer<R> {
    type State = ResourceState<R>;
    type Intent = ResourceIntent<R>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResourceIntent::FetchStarted { token } => {
                state.status = Status::Loading;
                state.pending_fetch = Some(token);
                state
            }
            ResourceIntent::FetchSucceeded { token, items } => {
                if state.pending_fetch != Some(token) {
                    // Superseded or cancelled request.
                    return state;
                }
                state.items = items;
                state.status = Status::Succeeded;
                state.error = None;
                state.pending_fetch = None;
                state
            }
            ResourceIntent::FetchFailed { token, error } => {
                if state.pending_fetch != Some(token) {
                    return state;
                }
                state.status = Status::Failed;
                state.error = Some(error);
                state.pending_fetch = None;
                state
            }
            ResourceIntent::FetchCancelled { token } => {
                if state.pending_fetch != Some(token) {
                    return state;
                }
                state.status = Status::Idle;
                state.pending_fetch = None;
                state
            }
            ResourceIntent::Created(record) => {
                state.items.push(record);
                state
            }
            ResourceIntent::Updated(record) => {
                if let Some(slot) = state.items.iter_mut().find(|item| item.id() == record.id()) {
                    *slot = record;
                }
                state
            }
            ResourceIntent::Deleted(id) => {
                state.items.retain(|item| item.id() != id);
                state
            }
        }
    }
}
