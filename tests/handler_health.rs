mod common;

#[tokio::test]
async fn health_reports_the_store_and_database_check() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_needs_no_session() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state);

    // No login beforehand.
    server.get("/health").await.assert_status_ok();
}
