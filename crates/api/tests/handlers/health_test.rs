use serde_json::Value;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_reports_catalog_size() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["studios"], 8);
}

#[tokio::test]
async fn test_version() {
    let ctx = TestContext::new();

    let body: Value = ctx.server.get("/version").await.json();
    assert_eq!(body["name"], "studiobook-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
