//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use chrono::NaiveDate;
use fleetdesk::api::ApiClient;
use fleetdesk::config::{ApiConfig, UiConfig};
use fleetdesk::model::{Assignment, Driver, LicenseType, Truck};
use fleetdesk::shutdown::ShutdownCoordinator;
use fleetdesk::store::resource::ResourceIntent;
use fleetdesk::store::token::RequestToken;
use fleetdesk::store::{Action, StoreSlice};
use fleetdesk::ui::app::App;
use fleetdesk::ui::events::AppEvent;
use fleetdesk::worker::{self, Command, CommandSender, Completion, Worker};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc::Receiver;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_client(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
    .expect("Failed to build client")
}

// -- Fixtures -----------------------------------------------------------------

pub fn driver(id: &str, name: &str, license_type: LicenseType) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        license_type,
    }
}

pub fn truck(id: &str, plate: &str, min_license_type: LicenseType) -> Truck {
    Truck {
        id: id.to_string(),
        plate: plate.to_string(),
        min_license_type,
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn assignment(id: &str, driver_id: &str, truck_id: &str, day: &str) -> Assignment {
    Assignment {
        id: id.to_string(),
        driver_id: driver_id.to_string(),
        truck_id: truck_id.to_string(),
        date: date(day),
        driver_name: None,
        truck_plate: None,
        driver_license_type: None,
    }
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command channel the test reads from.
pub fn test_app() -> (App, Receiver<Command>) {
    test_app_with(&UiConfig::default())
}

pub fn test_app_with(config: &UiConfig) -> (App, Receiver<Command>) {
    let (tx, rx) = worker::channel();
    (App::new(tx, config), rx)
}

/// Drain every command sent so far.
pub fn drain(rx: &mut Receiver<Command>) -> Vec<Command> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Complete the most recent list request for `kind`'s slice with `items`,
/// as if the worker had answered it.
pub fn load<R>(app: &mut App, items: Vec<R>)
where
    R: StoreSlice,
{
    let token = match app.state().slice::<R>().pending_fetch() {
        Some(token) => token,
        None => {
            let token = RequestToken::new(u64::MAX);
            app.dispatch(R::action(ResourceIntent::FetchStarted { token }));
            token
        }
    };
    app.dispatch(R::action(ResourceIntent::FetchSucceeded { token, items }));
}

// -- Worker helpers -----------------------------------------------------------

pub struct WorkerHarness {
    pub commands: CommandSender,
    pub events: mpsc::Receiver<AppEvent>,
    pub shutdown: ShutdownCoordinator,
}

impl WorkerHarness {
    /// Spawn a worker on the current tokio runtime.
    pub fn spawn(api: ApiClient) -> Self {
        let (event_tx, events) = mpsc::channel();
        let (commands, command_rx) = worker::channel();
        let shutdown = ShutdownCoordinator::new();
        tokio::spawn(Worker::new(api, event_tx).run(command_rx, shutdown.handle()));
        Self {
            commands,
            events,
            shutdown,
        }
    }

    /// Wait for the next completion without blocking the runtime.
    pub async fn next_completion(&self, timeout: Duration) -> Option<Completion> {
        let deadline = std::time::Instant::now() + timeout;
        while std::time::Instant::now() < deadline {
            match self.events.try_recv() {
                Ok(AppEvent::Completed(completion)) => return Some(completion),
                Ok(_) => {}
                Err(mpsc::TryRecvError::Empty) => {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
                Err(mpsc::TryRecvError::Disconnected) => return None,
            }
        }
        None
    }
}
