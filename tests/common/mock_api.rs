//! In-memory fleet service for exercising the HTTP client end to end.
//!
//! Mirrors the service's observable behaviour: uuid ids, enriched
//! assignment reads, `{"detail": ...}` error bodies, 422 validation arrays,
//! and `PUT` responses for drivers and trucks that omit `id`.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Map, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

/// A scripted response returned instead of the normal handling.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn detail(status: u16, detail: &str) -> Self {
        Self {
            status,
            body: json!({ "detail": detail }).to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Default)]
struct Fleet {
    drivers: Vec<Value>,
    trucks: Vec<Value>,
    assignments: Vec<Value>,
}

#[derive(Clone, Default)]
struct MockState {
    fleet: Arc<Mutex<Fleet>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    scripted: Arc<Mutex<VecDeque<MockResponse>>>,
    delay: Arc<Mutex<Duration>>,
}

/// Mock fleet service bound to an ephemeral port.
pub struct MockFleet {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockFleet {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock fleet service");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Base URL including the `/api` prefix.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn seed_driver(&self, id: &str, name: &str, license_type: &str) {
        self.state.fleet.lock().drivers.push(json!({
            "id": id, "name": name, "license_type": license_type,
        }));
    }

    pub fn seed_truck(&self, id: &str, plate: &str, min_license_type: &str) {
        self.state.fleet.lock().trucks.push(json!({
            "id": id, "plate": plate, "min_license_type": min_license_type,
        }));
    }

    pub fn seed_assignment(&self, id: &str, driver_id: &str, truck_id: &str, date: &str) {
        self.state.fleet.lock().assignments.push(json!({
            "id": id, "driver_id": driver_id, "truck_id": truck_id, "date": date,
        }));
    }

    /// Return `resp` for the next request, whatever it is.
    pub fn enqueue_response(&self, resp: MockResponse) {
        self.state.scripted.lock().push_back(resp);
    }

    /// Delay every response by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock() = delay;
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn count(&self, resource: &str) -> usize {
        let fleet = self.state.fleet.lock();
        match resource {
            "drivers" => fleet.drivers.len(),
            "trucks" => fleet.trucks.len(),
            _ => fleet.assignments.len(),
        }
    }
}

impl Drop for MockFleet {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().push(CapturedRequest {
        method: method.to_string(),
        path: path.clone(),
        body: body.clone(),
    });

    let delay = *state.delay.lock();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    if let Some(scripted) = state.scripted.lock().pop_front() {
        return respond(scripted.status, scripted.body);
    }

    let segments: Vec<&str> = path
        .trim_start_matches("/api/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    let payload: Option<Map<String, Value>> = serde_json::from_slice(&body).ok();

    let mut fleet = state.fleet.lock();
    let (status, value) = match (method.as_str(), segments.as_slice()) {
        ("GET", [resource]) => list(&fleet, resource),
        ("POST", [resource]) => match payload {
            Some(payload) => create(&mut fleet, resource, payload),
            None => invalid_body(),
        },
        ("PUT", [resource, id]) => match payload {
            Some(payload) => update(&mut fleet, resource, id, payload),
            None => invalid_body(),
        },
        ("DELETE", [resource, id]) => delete(&mut fleet, resource, id),
        _ => (404, json!({ "detail": "Not Found" })),
    };
    respond(status, value.to_string())
}

fn respond(status: u16, body: String) -> Response<Body> {
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn invalid_body() -> (u16, Value) {
    (
        422,
        json!({ "detail": [{ "loc": ["body"], "msg": "field required", "type": "missing" }] }),
    )
}

fn missing(payload: &Map<String, Value>, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|f| payload.get(*f).and_then(Value::as_str).is_none())
}

fn license_rank(value: &Value) -> u8 {
    match value.as_str() {
        Some("A") => 1,
        Some("B") => 2,
        Some("C") => 3,
        Some("D") => 4,
        Some("E") => 5,
        _ => 0,
    }
}

fn find<'a>(records: &'a [Value], id: &str) -> Option<&'a Value> {
    records.iter().find(|r| r["id"] == id)
}

fn enrich(fleet: &Fleet, assignment: &Value) -> Value {
    let mut out = assignment.clone();
    if let Some(driver) = find(&fleet.drivers, assignment["driver_id"].as_str().unwrap_or("")) {
        out["driver_name"] = driver["name"].clone();
        out["driver_license_type"] = driver["license_type"].clone();
    }
    if let Some(truck) = find(&fleet.trucks, assignment["truck_id"].as_str().unwrap_or("")) {
        out["truck_plate"] = truck["plate"].clone();
    }
    out
}

fn list(fleet: &Fleet, resource: &str) -> (u16, Value) {
    match resource {
        "drivers" => (200, Value::Array(fleet.drivers.clone())),
        "trucks" => (200, Value::Array(fleet.trucks.clone())),
        "assignments" => (
            200,
            Value::Array(fleet.assignments.iter().map(|a| enrich(fleet, a)).collect()),
        ),
        _ => (404, json!({ "detail": "Not Found" })),
    }
}

/// Business rules shared by assignment create and update.
fn check_assignment(
    fleet: &Fleet,
    payload: &Map<String, Value>,
    own_id: Option<&str>,
) -> Option<(u16, Value)> {
    let driver_id = payload["driver_id"].as_str().unwrap_or("");
    let truck_id = payload["truck_id"].as_str().unwrap_or("");
    let date = &payload["date"];
    let Some(driver) = find(&fleet.drivers, driver_id) else {
        return Some((404, json!({ "detail": "Driver not found" })));
    };
    let Some(truck) = find(&fleet.trucks, truck_id) else {
        return Some((404, json!({ "detail": "Truck not found" })));
    };
    if license_rank(&driver["license_type"]) < license_rank(&truck["min_license_type"]) {
        return Some((
            400,
            json!({ "detail": "Driver does not have the required license type" }),
        ));
    }
    let others = || {
        fleet
            .assignments
            .iter()
            .filter(move |a| Some(a["id"].as_str().unwrap_or("")) != own_id)
    };
    if others().any(|a| a["driver_id"] == driver_id && &a["date"] == date) {
        return Some((
            400,
            json!({ "detail": "Driver is already assigned to another truck on this date" }),
        ));
    }
    if others().any(|a| a["truck_id"] == truck_id && &a["date"] == date) {
        return Some((
            400,
            json!({ "detail": "Truck is already assigned to another driver on this date" }),
        ));
    }
    None
}

fn create(fleet: &mut Fleet, resource: &str, payload: Map<String, Value>) -> (u16, Value) {
    let id = uuid::Uuid::new_v4().to_string();
    match resource {
        "drivers" => {
            if missing(&payload, &["name", "license_type"]) {
                return invalid_body();
            }
            let driver = json!({
                "id": id, "name": payload["name"], "license_type": payload["license_type"],
            });
            fleet.drivers.push(driver.clone());
            (200, driver)
        }
        "trucks" => {
            if missing(&payload, &["plate", "min_license_type"]) {
                return invalid_body();
            }
            if fleet.trucks.iter().any(|t| t["plate"] == payload["plate"]) {
                return (
                    409,
                    json!({ "detail": "A truck with this plate already exists" }),
                );
            }
            let truck = json!({
                "id": id, "plate": payload["plate"], "min_license_type": payload["min_license_type"],
            });
            fleet.trucks.push(truck.clone());
            (200, truck)
        }
        "assignments" => {
            if missing(&payload, &["driver_id", "truck_id", "date"]) {
                return invalid_body();
            }
            if let Some(rejection) = check_assignment(fleet, &payload, None) {
                return rejection;
            }
            let assignment = json!({
                "id": id, "driver_id": payload["driver_id"], "truck_id": payload["truck_id"],
                "date": payload["date"],
            });
            fleet.assignments.push(assignment.clone());
            (200, enrich(fleet, &assignment))
        }
        _ => (404, json!({ "detail": "Not Found" })),
    }
}

fn update(
    fleet: &mut Fleet,
    resource: &str,
    id: &str,
    payload: Map<String, Value>,
) -> (u16, Value) {
    let required: &[&str] = match resource {
        "drivers" => &["name", "license_type"],
        "trucks" => &["plate", "min_license_type"],
        _ => &["driver_id", "truck_id", "date"],
    };
    if missing(&payload, required) {
        return invalid_body();
    }
    match resource {
        "drivers" => {
            let Some(driver) = fleet.drivers.iter_mut().find(|d| d["id"] == id) else {
                return (404, json!({ "detail": "Driver not found" }));
            };
            driver["name"] = payload["name"].clone();
            driver["license_type"] = payload["license_type"].clone();
            // The service echoes the fields without the id.
            (200, json!({ "name": driver["name"], "license_type": driver["license_type"] }))
        }
        "trucks" => {
            let Some(truck) = fleet.trucks.iter_mut().find(|t| t["id"] == id) else {
                return (404, json!({ "detail": "Truck not found" }));
            };
            truck["plate"] = payload["plate"].clone();
            truck["min_license_type"] = payload["min_license_type"].clone();
            (
                200,
                json!({ "plate": truck["plate"], "min_license_type": truck["min_license_type"] }),
            )
        }
        "assignments" => {
            if find(&fleet.assignments, id).is_none() {
                return (404, json!({ "detail": "Assignment not found" }));
            }
            if let Some(rejection) = check_assignment(fleet, &payload, Some(id)) {
                return rejection;
            }
            let Some(assignment) = fleet.assignments.iter_mut().find(|a| a["id"] == id) else {
                return (404, json!({ "detail": "Assignment not found" }));
            };
            assignment["driver_id"] = payload["driver_id"].clone();
            assignment["truck_id"] = payload["truck_id"].clone();
            assignment["date"] = payload["date"].clone();
            let updated = assignment.clone();
            (200, enrich(fleet, &updated))
        }
        _ => (404, json!({ "detail": "Not Found" })),
    }
}

fn delete(fleet: &mut Fleet, resource: &str, id: &str) -> (u16, Value) {
    let (records, label) = match resource {
        "drivers" => (&mut fleet.drivers, "Driver"),
        "trucks" => (&mut fleet.trucks, "Truck"),
        "assignments" => (&mut fleet.assignments, "Assignment"),
        _ => return (404, json!({ "detail": "Not Found" })),
    };
    let before = records.len();
    records.retain(|r| r["id"] != id);
    if records.len() == before {
        return (404, json!({ "detail": format!("{label} not found") }));
    }
    (200, json!({ "message": format!("{label} deleted successfully") }))
}
