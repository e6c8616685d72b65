mod common;

// The harness wires the real health handler to an in-memory cache and
// activity store, but the database pool points at a closed port. The
// endpoint must report the outage per component instead of erroring.

#[tokio::test]
async fn test_health_reports_database_outage() {
    let app = common::test_app(common::FakeCatalog::default());

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["activity_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_response_structure() {
    let app = common::test_app(common::FakeCatalog::default());

    let response = app.server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("cache").is_some());
    assert!(json["checks"].get("activity_store").is_some());
}
