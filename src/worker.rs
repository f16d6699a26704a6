//! Runs slice operations off the UI thread.
//!
//! The UI sends [`Command`]s; every request becomes its own tokio task whose
//! [`Completion`] is posted back as an [`AppEvent`]. Cancelling a token
//! aborts the task, dropping the HTTP request with it.

use std::collections::HashMap;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::model::{
    Assignment, Driver, NewAssignment, NewDriver, NewTruck, ResourceKind, Truck,
};
use crate::shutdown::ShutdownHandle;
use crate::store::ops::{self, Outcome};
use crate::store::token::RequestToken;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 64;

/// One remote operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List(ResourceKind),
    CreateDriver(NewDriver),
    UpdateDriver(Driver),
    CreateTruck(NewTruck),
    UpdateTruck(Truck),
    CreateAssignment(NewAssignment),
    UpdateAssignment(Assignment),
    Delete { kind: ResourceKind, id: String },
}

impl Request {
    pub async fn execute(self, api: &ApiClient, token: RequestToken) -> Outcome {
        match self {
            Request::List(ResourceKind::Driver) => ops::list::<Driver>(api, token).await,
            Request::List(ResourceKind::Truck) => ops::list::<Truck>(api, token).await,
            Request::List(ResourceKind::Assignment) => ops::list::<Assignment>(api, token).await,
            Request::CreateDriver(draft) => ops::create::<Driver>(api, draft).await,
            Request::UpdateDriver(record) => ops::update(api, record).await,
            Request::CreateTruck(draft) => ops::create::<Truck>(api, draft).await,
            Request::UpdateTruck(record) => ops::update(api, record).await,
            Request::CreateAssignment(draft) => ops::create::<Assignment>(api, draft).await,
            Request::UpdateAssignment(record) => ops::update(api, record).await,
            Request::Delete { kind, id } => match kind {
                ResourceKind::Driver => ops::delete::<Driver>(api, id).await,
                ResourceKind::Truck => ops::delete::<Truck>(api, id).await,
                ResourceKind::Assignment => ops::delete::<Assignment>(api, id).await,
            },
        }
    }
}

#[derive(Debug)]
pub enum Command {
    Run {
        token: RequestToken,
        request: Request,
    },
    Cancel(RequestToken),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub token: RequestToken,
    pub outcome: Outcome,
}

pub type CommandSender = mpsc::Sender<Command>;

pub fn channel() -> (CommandSender, mpsc::Receiver<Command>) {
    mpsc::channel(COMMAND_BUFFER)
}

pub struct Worker {
    api: ApiClient,
    events: Sender<AppEvent>,
    in_flight: HashMap<RequestToken, JoinHandle<()>>,
}

impl Worker {
    pub fn new(api: ApiClient, events: Sender<AppEvent>) -> Self {
        Self {
            api,
            events,
            in_flight: HashMap::new(),
        }
    }

    /// Process commands until every sender is dropped or shutdown is
    /// signalled. Requests still in flight are aborted on exit.
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>, shutdown: ShutdownHandle) {
        loop {
            let command = tokio::select! {
                command = commands.recv() => command,
                _ = shutdown.wait() => None,
            };
            let Some(command) = command else {
                break;
            };
            self.in_flight.retain(|_, handle| !handle.is_finished());
            match command {
                Command::Run { token, request } => self.spawn(token, request),
                Command::Cancel(token) => {
                    if let Some(handle) = self.in_flight.remove(&token) {
                        handle.abort();
                        tracing::debug!(token = token.value(), "request cancelled");
                    }
                }
            }
        }

        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
        tracing::debug!("worker stopped");
    }

    fn spawn(&mut self, token: RequestToken, request: Request) {
        let api = self.api.clone();
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            let outcome = request.execute(&api, token).await;
            if events
                .send(AppEvent::Completed(Completion { token, outcome }))
                .is_err()
            {
                tracing::trace!(token = token.value(), "completion dropped (UI gone)");
            }
        });
        self.in_flight.insert(token, handle);
    }
}
