use std::sync::Arc;

use axum::http::StatusCode;
use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use studiobook_core::{
    ledger::DEFAULT_BOOKINGS_KEY,
    storage::{KeyValueStore, MemoryStore},
};

use crate::test_utils::TestContext;

fn booking(studio_id: u32, date: &str, time_slot: &str) -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    json!({
        "studioId": studio_id,
        "date": date,
        "timeSlot": time_slot,
        "name": name,
        "email": email,
    })
}

#[tokio::test]
async fn test_no_bookings_initially() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/bookings").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn test_create_booking_resolves_studio_name() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "studioId": 1,
            "date": "2025-06-01",
            "timeSlot": "9:00 - 10:00",
            "name": "Rafi Ahmed",
            "email": "rafi@example.com"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(
        body["data"],
        json!({
            "studioId": 1,
            "studioName": "Lumen Photo Studio",
            "date": "2025-06-01",
            "timeSlot": "9:00 - 10:00",
            "name": "Rafi Ahmed",
            "email": "rafi@example.com"
        })
    );

    let listed: Value = ctx.server.get("/api/bookings").await.json();
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(listed["data"][0]["displayDate"], "Sunday, June 1, 2025");
    assert_eq!(listed["data"][0]["studioName"], "Lumen Photo Studio");
}

#[tokio::test]
async fn test_double_booking_is_a_conflict() {
    let ctx = TestContext::new();

    ctx.server
        .post("/api/bookings")
        .json(&booking(1, "2025-06-01", "9:00 - 10:00"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&booking(1, "2025-06-01", "9:00 - 10:00"))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["success"], false);

    ctx.server
        .post("/api/bookings")
        .json(&booking(1, "2025-06-01", "10:00 - 11:00"))
        .await
        .assert_status(StatusCode::CREATED);

    let listed: Value = ctx.server.get("/api/bookings").await.json();
    assert_eq!(listed["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_missing_fields_are_bad_requests() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&json!({
            "studioId": 2,
            "date": "2025-06-01",
            "timeSlot": "10:00 - 11:00",
            "email": "nadia@example.com"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("name"));

    // Nothing was persisted
    assert_eq!(ctx.store.load(DEFAULT_BOOKINGS_KEY).await.expect("load"), None);
}

#[tokio::test]
async fn test_unknown_studio_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/bookings")
        .json(&booking(99, "2025-06-01", "9:00 - 10:00"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_bookings() {
    let ctx = TestContext::new();

    for slot in ["11:00 - 12:00", "12:00 - 13:00"] {
        ctx.server
            .post("/api/bookings")
            .json(&booking(6, "2025-08-15", slot))
            .await
            .assert_status(StatusCode::CREATED);
    }

    ctx.server
        .delete("/api/bookings")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    ctx.server
        .delete("/api/bookings")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed: Value = ctx.server.get("/api/bookings").await.json();
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn test_corrupt_ledger_is_a_server_error() {
    let store = Arc::new(MemoryStore::with_entry(DEFAULT_BOOKINGS_KEY, "not a list"));
    let ctx = TestContext::with_store(store);

    let response = ctx.server.get("/api/bookings").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .starts_with("Corrupt storage"));

    // Clearing recovers the ledger
    ctx.server
        .delete("/api/bookings")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    ctx.server.get("/api/bookings").await.assert_status_ok();
}
