use crate::model::Resource;
use crate::store::mvi::Intent;
use crate::store::token::RequestToken;

/// Transitions of a collection slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceIntent<R> {
    /// A list request was issued.
    FetchStarted { token: RequestToken },

    /// The list request identified by `token` returned the full collection.
    FetchSucceeded { token: RequestToken, items: Vec<R> },

    /// The list request identified by `token` failed.
    FetchFailed { token: RequestToken, error: String },

    /// The list request was abandoned by the screen that issued it.
    FetchCancelled { token: RequestToken },

    /// The service stored a new record.
    Created(R),

    /// The service acknowledged an update.
    Updated(R),

    /// The service deleted the record with this id.
    Deleted(String),
}

impl<R: Resource> Intent for ResourceIntent<R> {}
