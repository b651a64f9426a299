use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use backend_checker::console::clients::checker::checks::health;
use backend_checker::console::clients::checker::logger::Logger;
use serde_json::json;

use crate::common::backend::{self, MockBackend, HEALTH_PATH};

async fn run_health_check(router: Router) -> (bool, Logger) {
    let server = MockBackend::start(router).await;
    let config = server.configuration();
    let console = Logger::new();

    let passed = health::run(&backend::client(&config), config.timeouts.request, &console).await;

    (passed, console)
}

#[tokio::test]
async fn it_should_pass_when_the_backend_greets_with_hello_world() {
    let router = Router::new().route(HEALTH_PATH, get(|| async { backend::hello_world() }));

    let (passed, console) = run_health_check(router).await;

    assert!(passed);
    assert!(console.log().contains("Status Code: 200"));
    assert!(console.log().contains(r#"Response: {"message":"Hello World"}"#));
    assert!(console.log().contains("✅ Health check endpoint working correctly"));
}

#[tokio::test]
async fn it_should_fail_when_the_message_is_not_hello_world() {
    let router = Router::new().route(HEALTH_PATH, get(|| async { Json(json!({ "message": "Goodbye" })) }));

    let (passed, console) = run_health_check(router).await;

    assert!(!passed);
    assert!(console.log().contains(r#"❌ Unexpected response data: {"message":"Goodbye"}"#));
}

#[tokio::test]
async fn it_should_fail_when_the_message_field_is_missing() {
    let router = Router::new().route(HEALTH_PATH, get(|| async { Json(json!({ "status": "ok" })) }));

    let (passed, _console) = run_health_check(router).await;

    assert!(!passed);
}

#[tokio::test]
async fn it_should_fail_when_the_body_is_not_a_json_object() {
    let router = Router::new().route(HEALTH_PATH, get(|| async { Json(json!(["Hello World"])) }));

    let (passed, console) = run_health_check(router).await;

    assert!(!passed);
    assert!(console.log().contains(r#"❌ Unexpected response data: ["Hello World"]"#));
}

#[tokio::test]
async fn it_should_fail_when_the_greeting_is_a_json_string() {
    let router = Router::new().route(HEALTH_PATH, get(|| async { Json(json!("Hello World")) }));

    let (passed, _console) = run_health_check(router).await;

    assert!(!passed);
}

#[tokio::test]
async fn it_should_fail_when_the_body_is_not_json() {
    let router = Router::new().route(HEALTH_PATH, get(|| async { "Hello World" }));

    let (passed, console) = run_health_check(router).await;

    assert!(!passed);
    assert!(console.log().contains("❌ Health check request failed: Failed to deserialize the JSON response body"));
}

#[tokio::test]
async fn it_should_fail_when_the_status_code_is_not_200_even_with_the_expected_body() {
    let router = Router::new().route(
        HEALTH_PATH,
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, backend::hello_world()) }),
    );

    let (passed, console) = run_health_check(router).await;

    assert!(!passed);
    assert!(console.log().contains("Status Code: 500"));
    assert!(console.log().contains("❌ Health check failed with status 500"));
}

#[tokio::test]
async fn it_should_fail_when_the_backend_fails_with_a_server_error() {
    let (passed, _console) = run_health_check(backend::failing()).await;

    assert!(!passed);
}

#[tokio::test]
async fn it_should_fail_when_the_backend_is_not_reachable() {
    let config = backend::configuration(&backend::unreachable_base_url());
    let console = Logger::new();

    let passed = health::run(&backend::client(&config), config.timeouts.request, &console).await;

    assert!(!passed);
    assert!(console.log().contains("❌ Health check request failed"));
}

#[tokio::test]
async fn it_should_fail_when_the_backend_does_not_answer_within_the_timeout() {
    let router = Router::new().route(
        HEALTH_PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            backend::hello_world()
        }),
    );
    let server = MockBackend::start(router).await;
    let config = backend::configuration_with_timeouts(&server.base_url(), Duration::from_millis(200));
    let console = Logger::new();

    let started = std::time::Instant::now();
    let passed = health::run(&backend::client(&config), config.timeouts.request, &console).await;

    assert!(!passed);
    assert!(started.elapsed() < Duration::from_secs(5));
}
