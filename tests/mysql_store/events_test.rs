use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{unique_title, TestContext};
use event_portal::modules::registrations::interface::RegistrationRepository;

#[tokio::test]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn delete_cascades_for_any_registration_count() {
    let ctx = TestContext::mysql().await;
    let (_, token) = ctx.user().await;

    for count in [0usize, 1, 5] {
        let event_id = ctx.create_event(None, &unique_title("Doomed"), "2025-03-14").await;
        for _ in 0..count {
            ctx.register(&token, event_id).await;
        }
        assert_eq!(ctx.store.registrations.list_by_event(event_id).await.unwrap().len(), count);

        let response = ctx.server.delete(&format!("/api/events/{event_id}")).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Event and related registrations deleted successfully!"
        );
        assert!(
            ctx.store.registrations.list_by_event(event_id).await.unwrap().is_empty(),
            "{count} registrations left behind"
        );
        ctx.server
            .get(&format!("/api/events/{event_id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn delete_leaves_other_events_registrations() {
    let ctx = TestContext::mysql().await;
    let (_, token) = ctx.user().await;
    let keep = ctx.create_event(None, &unique_title("Keep"), "2025-03-14").await;
    let doomed = ctx.create_event(None, &unique_title("Doomed"), "2025-04-14").await;
    let kept = ctx.register(&token, keep).await;
    ctx.register(&token, doomed).await;

    ctx.server
        .delete(&format!("/api/events/{doomed}"))
        .await
        .assert_status_ok();

    let rows: Vec<Value> = ctx
        .server
        .get(&format!("/api/events/{keep}/registrations"))
        .await
        .json();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], kept);
}

#[tokio::test]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn absent_and_non_numeric_events_are_not_found() {
    let ctx = TestContext::mysql().await;
    let absent = format!("/api/events/{}", i64::MAX);

    for path in [absent.as_str(), "/api/events/abc"] {
        for response in [
            ctx.server.get(path).await,
            ctx.server
                .put(path)
                .json(&json!({ "title": "X", "category": "Talk", "date": "2025-01-01" }))
                .await,
            ctx.server.delete(path).await,
        ] {
            response.assert_status(StatusCode::NOT_FOUND);
            let body: Value = response.json();
            assert_eq!(body["message"], "Event not found", "path {path}");
        }
    }
}

#[tokio::test]
#[ignore = "requires a MySQL database at DATABASE_URL"]
async fn update_with_identical_values_still_succeeds() {
    let ctx = TestContext::mysql().await;
    let title = unique_title("Unchanged");
    let id = ctx.create_event(None, &title, "2025-03-14").await;
    let body = json!({
        "title": &title,
        "category": "Workshop",
        "date": "2025-03-14",
        "description": "Hands-on session",
        "image": "https://example.com/cover.png"
    });

    // Zero affected rows on MySQL must not read as a missing event.
    for _ in 0..2 {
        ctx.server
            .put(&format!("/api/events/{id}"))
            .json(&body)
            .await
            .assert_status_ok();
    }

    let event: Value = ctx.server.get(&format!("/api/events/{id}")).await.json();
    assert_eq!(event["title"], title.as_str());
    assert_eq!(event["date"], "2025-03-14");
}
