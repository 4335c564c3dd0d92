use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestContext;

#[tokio::test]
async fn register_then_delete_event_empties_my_list() {
    let ctx = TestContext::new();
    let (_, token) = ctx.user().await;
    let event_id = ctx.create_event(None, "Lifecycle", "2025-03-14").await;

    let reg = ctx.register(&token, event_id).await;

    let rows: Vec<Value> = ctx
        .server
        .get("/api/registrations/my")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], reg);
    assert_eq!(rows[0]["event_title"], "Lifecycle");

    ctx.server
        .delete(&format!("/api/events/{event_id}"))
        .await
        .assert_status_ok();

    let rows: Vec<Value> = ctx
        .server
        .get("/api/registrations/my")
        .authorization_bearer(&token)
        .await
        .json();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn delete_registration() {
    let ctx = TestContext::new();
    let (_, token) = ctx.user().await;
    let event_id = ctx.create_event(None, "Cancelled", "2025-03-14").await;
    let reg = ctx.register(&token, event_id).await;

    let response = ctx.server.delete(&format!("/api/registrations/{reg}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Registration deleted successfully.");

    let rows: Vec<Value> = ctx.server.get("/api/registrations").await.json();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn delete_unknown_registration_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.delete("/api/registrations/777").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Registration not found.");
}

#[tokio::test]
async fn fix_cascade_requires_admin() {
    let ctx = TestContext::new();
    let (_, user) = ctx.user().await;

    ctx.server
        .post("/api/registrations/fix-cascade")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    ctx.server
        .post("/api/registrations/fix-cascade")
        .authorization_bearer(&user)
        .await
        .assert_status(StatusCode::FORBIDDEN);
    assert!(!ctx.memory().event_cascade_enabled());
}

#[tokio::test]
async fn fix_cascade_enables_cascade() {
    let ctx = TestContext::new();
    let admin = ctx.admin().await;

    let response = ctx
        .server
        .post("/api/registrations/fix-cascade")
        .authorization_bearer(&admin)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Foreign key updated with ON DELETE CASCADE.");
    assert!(ctx.memory().event_cascade_enabled());
}

#[tokio::test]
async fn delete_non_numeric_registration_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx.server.delete("/api/registrations/abc").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Registration not found.");
}
