//! Worker request lifecycle: completions, cancellation and shutdown.

mod common;

use common::mock_api::MockFleet;
use common::{api_client, WorkerHarness};
use fleetdesk::model::{LicenseType, NewDriver, ResourceKind};
use fleetdesk::store::notifications::{NotificationIntent, NotificationLevel};
use fleetdesk::store::resource::ResourceIntent;
use fleetdesk::store::token::RequestToken;
use fleetdesk::store::Action;
use fleetdesk::worker::{Command, Request};
use std::time::Duration;

#[tokio::test]
async fn list_completion_carries_items() {
    let fleet = MockFleet::start().await;
    fleet.seed_driver("d1", "Ana", "B");
    let worker = WorkerHarness::spawn(api_client(&fleet.base_url()));

    let token = RequestToken::new(1);
    worker
        .commands
        .send(Command::Run {
            token,
            request: Request::List(ResourceKind::Driver),
        })
        .await
        .unwrap();

    let completion = worker
        .next_completion(Duration::from_secs(2))
        .await
        .expect("completion");
    assert_eq!(completion.token, token);
    assert!(completion.outcome.succeeded);
    match &completion.outcome.actions[..] {
        [Action::Drivers(ResourceIntent::FetchSucceeded { token: t, items })] => {
            assert_eq!(*t, token);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].name, "Ana");
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[tokio::test]
async fn cancel_drops_in_flight_request() {
    let fleet = MockFleet::start().await;
    fleet.set_delay(Duration::from_millis(400));
    let worker = WorkerHarness::spawn(api_client(&fleet.base_url()));

    let token = RequestToken::new(5);
    worker
        .commands
        .send(Command::Run {
            token,
            request: Request::List(ResourceKind::Assignment),
        })
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    worker.commands.send(Command::Cancel(token)).await.unwrap();

    assert!(worker
        .next_completion(Duration::from_millis(800))
        .await
        .is_none());
}

#[tokio::test]
async fn uncancelled_requests_still_complete() {
    let fleet = MockFleet::start().await;
    fleet.set_delay(Duration::from_millis(100));
    let worker = WorkerHarness::spawn(api_client(&fleet.base_url()));

    let (kept, cancelled) = (RequestToken::new(1), RequestToken::new(2));
    for token in [kept, cancelled] {
        worker
            .commands
            .send(Command::Run {
                token,
                request: Request::List(ResourceKind::Truck),
            })
            .await
            .unwrap();
    }
    worker.commands.send(Command::Cancel(cancelled)).await.unwrap();

    let completion = worker
        .next_completion(Duration::from_secs(2))
        .await
        .expect("completion");
    assert_eq!(completion.token, kept);
    assert!(worker
        .next_completion(Duration::from_millis(300))
        .await
        .is_none());
}

#[tokio::test]
async fn mutation_outcome_carries_one_notification() {
    let fleet = MockFleet::start().await;
    let worker = WorkerHarness::spawn(api_client(&fleet.base_url()));

    worker
        .commands
        .send(Command::Run {
            token: RequestToken::new(3),
            request: Request::CreateDriver(NewDriver {
                name: "Jane Doe".into(),
                license_type: LicenseType::B,
            }),
        })
        .await
        .unwrap();

    let outcome = worker
        .next_completion(Duration::from_secs(2))
        .await
        .expect("completion")
        .outcome;
    assert!(outcome.succeeded);
    let notifications: Vec<_> = outcome
        .actions
        .iter()
        .filter_map(|a| match a {
            Action::Notification(NotificationIntent::Push(n)) => Some(n),
            _ => None,
        })
        .collect();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Success);
    assert_eq!(notifications[0].message, "Driver added successfully!");
    assert_eq!(fleet.count("drivers"), 1);
}

#[tokio::test]
async fn failed_delete_reports_service_detail() {
    let fleet = MockFleet::start().await;
    let worker = WorkerHarness::spawn(api_client(&fleet.base_url()));

    worker
        .commands
        .send(Command::Run {
            token: RequestToken::new(9),
            request: Request::Delete {
                kind: ResourceKind::Driver,
                id: "missing".into(),
            },
        })
        .await
        .unwrap();

    let outcome = worker
        .next_completion(Duration::from_secs(2))
        .await
        .expect("completion")
        .outcome;
    assert!(!outcome.succeeded);
    match outcome.actions.as_slice() {
        [Action::Notification(NotificationIntent::Push(n))] => {
            assert_eq!(n.level, NotificationLevel::Error);
            assert_eq!(n.message, "Driver not found");
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[tokio::test]
async fn worker_stops_on_shutdown() {
    let fleet = MockFleet::start().await;
    let worker = WorkerHarness::spawn(api_client(&fleet.base_url()));

    worker.shutdown.signal();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let sent = worker
        .commands
        .send(Command::Cancel(RequestToken::new(1)))
        .await;
    assert!(sent.is_err(), "worker should have dropped its receiver");
}
