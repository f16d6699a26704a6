//! The four asynchronous operations of every collection slice.
//!
//! Each operation talks to the service and returns the actions its
//! completion commits. Mutations always carry exactly one notification;
//! a list completion carries none.

use crate::api::{ApiClient, ApiError};
use crate::model::Resource;
use crate::store::notifications::{Notification, NotificationIntent};
use crate::store::resource::ResourceIntent;
use crate::store::token::RequestToken;
use crate::store::{Action, StoreSlice};

/// What a finished operation wants applied to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub actions: Vec<Action>,
    pub succeeded: bool,
}

impl Outcome {
    fn ok(actions: Vec<Action>) -> Self {
        Self {
            actions,
            succeeded: true,
        }
    }

    fn failed(actions: Vec<Action>) -> Self {
        Self {
            actions,
            succeeded: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Add,
    Update,
    Delete,
}

impl Mutation {
    fn past(self) -> &'static str {
        match self {
            Mutation::Add => "added",
            Mutation::Update => "updated",
            Mutation::Delete => "deleted",
        }
    }

    fn gerund(self) -> &'static str {
        match self {
            Mutation::Add => "adding",
            Mutation::Update => "updating",
            Mutation::Delete => "deleting",
        }
    }
}

fn success_message<R: Resource>(mutation: Mutation) -> String {
    format!("{} {} successfully!", R::KIND.label(), mutation.past())
}

fn fallback_message<R: Resource>(mutation: Mutation) -> String {
    format!(
        "Error {} {}.",
        mutation.gerund(),
        R::KIND.label().to_lowercase()
    )
}

fn list_fallback<R: Resource>() -> String {
    format!("Error fetching {}.", R::KIND.plural())
}

pub async fn list<R: StoreSlice>(api: &ApiClient, token: RequestToken) -> Outcome {
    match api.list::<R>().await {
        Ok(items) => {
            tracing::debug!(count = items.len(), token = token.value(), "{} listed", R::KIND.plural());
            Outcome::ok(vec![R::action(ResourceIntent::FetchSucceeded { token, items })])
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                status = ?err.status(),
                token = token.value(),
                "listing {} failed",
                R::KIND.plural()
            );
            let error = err.detail_or(&list_fallback::<R>());
            Outcome::failed(vec![R::action(ResourceIntent::FetchFailed { token, error })])
        }
    }
}

pub async fn create<R: StoreSlice>(api: &ApiClient, draft: R::Draft) -> Outcome {
    let result = api.create::<R>(&draft).await;
    settle::<R, _>(Mutation::Add, result, ResourceIntent::Created)
}

pub async fn update<R: StoreSlice>(api: &ApiClient, record: R) -> Outcome {
    let result = api.update::<R>(&record).await;
    settle::<R, _>(Mutation::Update, result, ResourceIntent::Updated)
}

pub async fn delete<R: StoreSlice>(api: &ApiClient, id: String) -> Outcome {
    let result = api.delete::<R>(&id).await.map(|()| id);
    settle::<R, _>(Mutation::Delete, result, ResourceIntent::Deleted)
}

fn settle<R: StoreSlice, T>(
    mutation: Mutation,
    result: Result<T, ApiError>,
    on_success: impl FnOnce(T) -> ResourceIntent<R>,
) -> Outcome {
    match result {
        Ok(value) => {
            tracing::info!("{} {}", R::KIND.label(), mutation.past());
            Outcome::ok(vec![
                R::action(on_success(value)),
                Action::Notification(NotificationIntent::Push(Notification::success(
                    success_message::<R>(mutation),
                ))),
            ])
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                status = ?err.status(),
                "{} {} failed",
                mutation.gerund(),
                R::KIND.label()
            );
            let message = err.detail_or(&fallback_message::<R>(mutation));
            Outcome::failed(vec![Action::Notification(NotificationIntent::Push(
                Notification::error(message),
            ))])
        }
    }
}
