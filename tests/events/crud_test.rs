use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestContext;

#[tokio::test]
async fn create_and_fetch_event() {
    let ctx = TestContext::new();
    let id = ctx.create_event(None, "Rust Workshop", "2025-03-14").await;

    let response = ctx.server.get(&format!("/api/events/{id}")).await;

    response.assert_status_ok();
    let event: Value = response.json();
    assert_eq!(event["id"], id);
    assert_eq!(event["title"], "Rust Workshop");
    assert_eq!(event["category"], "Workshop");
    assert_eq!(event["date"], "2025-03-14");
    assert_eq!(event["description"], "Hands-on session");
    assert_eq!(event["image"], "https://example.com/cover.png");
}

#[tokio::test]
async fn create_returns_created_message() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/events")
        .json(&json!({ "title": "Meetup", "category": "Social", "date": "2025-01-01" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Event created successfully!");
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/events")
        .json(&json!({ "title": "Bare", "category": "Talk", "date": "2025-02-02" }))
        .await
        .assert_status(StatusCode::CREATED);

    let events: Vec<Value> = ctx.server.get("/api/events").await.json();
    assert_eq!(events.len(), 1);
    assert!(events[0]["description"].is_null());
    assert!(events[0]["image"].is_null());
}

#[tokio::test]
async fn create_missing_required_fields_rejected() {
    let ctx = TestContext::new();

    for body in [
        json!({ "category": "Talk", "date": "2025-01-01" }),
        json!({ "title": "No Category", "date": "2025-01-01" }),
        json!({ "title": "No Date", "category": "Talk" }),
    ] {
        let response = ctx.server.post("/api/events").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let json: Value = response.json();
        assert_eq!(json["message"], "Required fields missing", "body {body}");
    }
}

#[tokio::test]
async fn create_with_unparseable_date_rejected() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/events")
        .json(&json!({ "title": "Bad Date", "category": "Talk", "date": "14/03/2025" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_orders_newest_date_first() {
    let ctx = TestContext::new();
    ctx.create_event(None, "Middle", "2025-05-01").await;
    ctx.create_event(None, "Oldest", "2024-01-01").await;
    ctx.create_event(None, "Newest", "2026-09-30").await;

    let events: Vec<Value> = ctx.server.get("/api/events").await.json();
    let titles: Vec<&str> = events.iter().map(|e| e["title"].as_str().unwrap()).collect();

    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn get_unknown_event_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/events/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Event not found");
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let ctx = TestContext::new();
    let id = ctx.create_event(None, "Draft", "2025-03-14").await;

    let response = ctx
        .server
        .put(&format!("/api/events/{id}"))
        .json(&json!({ "title": "Final", "category": "Conference", "date": "2025-04-01" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Event updated successfully!");

    let event: Value = ctx.server.get(&format!("/api/events/{id}")).await.json();
    assert_eq!(event["title"], "Final");
    assert_eq!(event["category"], "Conference");
    assert_eq!(event["date"], "2025-04-01");
    assert!(event["description"].is_null());
    assert!(event["image"].is_null());
}

#[tokio::test]
async fn update_with_identical_values_still_succeeds() {
    let ctx = TestContext::new();
    let id = ctx.create_event(None, "Same", "2025-03-14").await;
    let body = json!({
        "title": "Same",
        "category": "Workshop",
        "date": "2025-03-14",
        "description": "Hands-on session",
        "image": "https://example.com/cover.png"
    });

    ctx.server
        .put(&format!("/api/events/{id}"))
        .json(&body)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn update_unknown_event_is_not_found() {
    let ctx = TestContext::new();

    ctx.server
        .put("/api/events/404")
        .json(&json!({ "title": "Ghost", "category": "Talk", "date": "2025-01-01" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_fields_rejected() {
    let ctx = TestContext::new();
    let id = ctx.create_event(None, "Partial", "2025-03-14").await;

    ctx.server
        .put(&format!("/api/events/{id}"))
        .json(&json!({ "title": "Only Title" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let ctx = TestContext::new();

    let responses = [
        ctx.server.get("/api/events/abc").await,
        ctx.server
            .put("/api/events/abc")
            .json(&json!({ "title": "X", "category": "Talk", "date": "2025-01-01" }))
            .await,
        ctx.server.delete("/api/events/abc").await,
    ];
    for response in responses {
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Event not found");
    }
}

#[tokio::test]
async fn wrongly_typed_field_is_json_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/events")
        .json(&json!({ "title": 5, "category": "Talk", "date": "2025-01-01" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn malformed_json_is_json_bad_request() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/events")
        .text(r#"{"title": "Half"#)
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}
