use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

fn ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|studio| studio["Id"].as_u64().expect("numeric Id"))
        .collect()
}

#[tokio::test]
async fn test_list_studios_defaults() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/studios").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(
        body["pagination"],
        json!({
            "currentPage": 1,
            "totalPages": 1,
            "totalStudios": 8,
            "limit": 12,
            "hasNextPage": false,
            "hasPrevPage": false
        })
    );
}

#[tokio::test]
async fn test_list_studios_paginates() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/api/studios?page=2&limit=3").await.json();

    assert_eq!(ids(&body), vec![4, 5, 6]);
    assert_eq!(body["pagination"]["totalPages"], 3);
    assert_eq!(body["pagination"]["hasNextPage"], true);
    assert_eq!(body["pagination"]["hasPrevPage"], true);
}

#[tokio::test]
async fn test_list_studios_searches_locations() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/api/studios?search=sylhet").await.json();

    assert_eq!(ids(&body), vec![6, 8]);
    assert_eq!(body["pagination"]["totalStudios"], 2);
}

#[rstest]
#[case("/api/studios?page=0")]
#[case("/api/studios?limit=0")]
#[case("/api/studios?page=-1&limit=5")]
#[tokio::test]
async fn test_list_studios_rejects_bad_paging(#[case] uri: &str) {
    let ctx = TestContext::new();

    let response = ctx.server.get(uri).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Validation error: Page and limit must be greater than 0"
        })
    );
}

#[tokio::test]
async fn test_get_studio() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/api/studios/6").await.json();
    assert_eq!(body["data"]["Name"], "Bassline Studios");
    assert_eq!(body["data"]["Location"]["City"], "Sylhet");
}

#[tokio::test]
async fn test_get_unknown_studio() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/studios/404").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_studio_slots() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/api/studios/1/slots").await.json();
    let slots = body["data"].as_array().expect("slot array");

    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0], "9:00 - 10:00");
    assert_eq!(slots[7], "16:00 - 17:00");
}

#[tokio::test]
async fn test_studio_slots_ignore_minutes() {
    let ctx = TestContext::new();

    // Frame & Light opens 07:30 and closes 15:30
    let body: Value = ctx.server.get("/api/studios/7/slots").await.json();
    let slots = body["data"].as_array().expect("slot array");

    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0], "7:00 - 8:00");
    assert_eq!(slots[7], "14:00 - 15:00");
}

#[tokio::test]
async fn test_suggestions() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/api/studios/suggestions?q=ba").await.json();
    assert_eq!(
        body["data"],
        json!(["Agrabad", "Banani", "Nasirabad", "Zindabazar"])
    );

    let body: Value = ctx
        .server
        .get("/api/studios/suggestions?q=ba&limit=2")
        .await
        .json();
    assert_eq!(body["data"], json!(["Agrabad", "Banani"]));

    let body: Value = ctx.server.get("/api/studios/suggestions").await.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_nearby_uses_default_radius() {
    let ctx = TestContext::new();

    let body: Value = ctx
        .server
        .get("/api/studios/nearby?lat=23.7925&lng=90.4078")
        .await
        .json();
    let found: Vec<u64> = body["data"]
        .as_array()
        .expect("nearby array")
        .iter()
        .map(|n| n["studio"]["Id"].as_u64().expect("numeric Id"))
        .collect();

    assert_eq!(found, vec![1, 3, 2, 7]);
    assert!(body["data"][0]["distanceKm"].as_f64().expect("distance") < 0.001);
}

#[tokio::test]
async fn test_nearby_narrow_radius() {
    let ctx = TestContext::new();

    let body: Value = ctx
        .server
        .get("/api/studios/nearby?lat=24.8949&lng=91.8687&radius_km=0.5")
        .await
        .json();
    let found = body["data"].as_array().expect("nearby array");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["studio"]["Name"], "Bassline Studios");
}

#[tokio::test]
async fn test_nearby_rejects_invalid_coordinates() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/api/studios/nearby?lat=123&lng=90").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/api/studios/stats").await.json();
    assert_eq!(body["data"]["totalStudios"], 8);
    let rating = body["data"]["averageRating"].as_f64().expect("rating");
    assert!((rating - 4.4).abs() < 1e-9);
    let price = body["data"]["averagePricePerHour"].as_f64().expect("price");
    assert!((price - 1362.5).abs() < 1e-9);
}
