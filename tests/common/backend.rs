//! Mock backend.
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use backend_checker::console::clients::backend::Client;
use backend_checker::console::clients::checker::config::{Configuration, PlainConfiguration, Timeouts};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const ROOT_PATH: &str = "/api";
pub const HEALTH_PATH: &str = "/api/";
pub const STATUS_PATH: &str = "/api/status";

/// A backend running in the test process. It stops when dropped.
pub struct MockBackend {
    addr: SocketAddr,
    server: JoinHandle<()>,
}

impl MockBackend {
    /// # Panics
    ///
    /// Will panic if it can't bind an ephemeral port on localhost.
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("it should bind an ephemeral port");

        let addr = listener.local_addr().expect("it should have a local address");

        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("the mock backend should keep serving");
        });

        Self { addr, server }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{ROOT_PATH}", self.addr)
    }

    pub fn configuration(&self) -> Configuration {
        configuration(&self.base_url())
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// # Panics
///
/// Will panic if the base URL is not valid.
pub fn configuration(base_url: &str) -> Configuration {
    Configuration::try_from(PlainConfiguration {
        backend_url: base_url.to_string(),
    })
    .expect("it should be a valid backend URL")
}

/// A configuration with timeouts short enough for tests.
pub fn configuration_with_timeouts(base_url: &str, timeout: Duration) -> Configuration {
    let mut config = configuration(base_url);
    config.timeouts = Timeouts {
        availability: timeout,
        request: timeout,
    };
    config
}

/// # Panics
///
/// Will panic if the http client can't be built.
pub fn client(config: &Configuration) -> Client {
    Client::new(config.endpoints.clone()).expect("it should build the http client")
}

/// A base URL where nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("it should bind an ephemeral port");
    let addr = listener.local_addr().expect("it should have a local address");
    drop(listener);

    format!("http://{addr}{ROOT_PATH}")
}

pub fn hello_world() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

type Records = Arc<Mutex<Vec<Value>>>;

/// A backend behaving like the real one: it greets on the health check
/// endpoint and keeps the status records in memory.
///
/// Creating a status record only succeeds with the exact body sent by the
/// checker.
pub fn healthy() -> Router {
    Router::new()
        .route(ROOT_PATH, get(|| async { hello_world() }))
        .route(HEALTH_PATH, get(|| async { hello_world() }))
        .route(STATUS_PATH, get(list_status).post(create_status))
        .with_state(Records::default())
}

async fn create_status(State(records): State<Records>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body != json!({ "client_name": "test_alarm_client" }) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": format!("unexpected body: {body}") })),
        );
    }

    let mut records = records.lock().expect("it should lock the records");

    let record = json!({
        "id": records.len().to_string(),
        "client_name": body["client_name"],
        "timestamp": "2024-01-01T00:00:00"
    });

    records.push(record.clone());

    (StatusCode::OK, Json(record))
}

async fn list_status(State(records): State<Records>) -> Json<Value> {
    Json(Value::Array(records.lock().expect("it should lock the records").clone()))
}

/// A backend answering `500` to every request.
pub fn failing() -> Router {
    Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") })
}

/// Counts the requests a route receives.
#[derive(Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn hits(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
