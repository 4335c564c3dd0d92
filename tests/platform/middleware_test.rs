use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::{json, Value};

use crate::common::{test_email, test_password, TestContext};
use event_portal::config::HttpSettings;

#[tokio::test]
async fn root_banner() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Event Portal API");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/nowhere").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn security_headers_present() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/events").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
    assert!(response
        .header("strict-transport-security")
        .to_str()
        .unwrap()
        .starts_with("max-age="));
}

#[tokio::test]
async fn auth_routes_are_rate_limited() {
    let ctx = TestContext::with_settings(HttpSettings {
        auth_rate_limit_burst: 2,
        auth_rate_limit_per_minute: 1,
        ..HttpSettings::default()
    });
    let body = json!({ "email": test_email(), "password": test_password() });

    for _ in 0..2 {
        ctx.server
            .post("/api/auth/login")
            .json(&body)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    let response = ctx.server.post("/api/auth/login").json(&body).await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    let json: Value = response.json();
    assert_eq!(json["message"], "Too many requests, try again later.");

    // Other prefixes draw from no bucket.
    ctx.server.get("/api/events").await.assert_status_ok();
}

#[tokio::test]
async fn oversized_body_rejected() {
    let ctx = TestContext::with_settings(HttpSettings {
        max_body_bytes: 64,
        ..HttpSettings::default()
    });

    let response = ctx
        .server
        .post("/api/contact")
        .json(&json!({
            "name": "Verbose",
            "email": "verbose@example.com",
            "message": "x".repeat(1024)
        }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/events")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("https://portal.example.com"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
}
