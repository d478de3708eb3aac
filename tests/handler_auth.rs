mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn login_opens_a_session_and_the_echo_reflects_it() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state.clone());

    common::login_as(&server, &state, "alice", "hunter2").await;

    let response = server.get("/auth").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["username"], "alice");
    assert!(body["user_id"].as_i64().unwrap() >= 1);
}

#[tokio::test]
async fn login_sets_an_http_only_cookie_without_leaking_the_token() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state.clone());
    state
        .auth_service
        .provision_user("alice", "hunter2")
        .await
        .unwrap();

    let response = server
        .post("/auth/login")
        .json(&json!({ "username": "alice", "password": "hunter2" }))
        .await;
    response.assert_status_ok();

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));

    // The body is just an opaque marker.
    assert_eq!(response.json::<serde_json::Value>(), json!({"success": true}));
}

#[tokio::test]
async fn bad_credentials_and_unknown_users_get_the_same_answer() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state.clone());
    state
        .auth_service
        .provision_user("alice", "hunter2")
        .await
        .unwrap();

    let wrong_password = server
        .post("/auth/login")
        .json(&json!({ "username": "alice", "password": "nope" }))
        .await;
    wrong_password.assert_status(StatusCode::UNAUTHORIZED);

    let unknown_user = server
        .post("/auth/login")
        .json(&json!({ "username": "bob", "password": "nope" }))
        .await;
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);

    assert_eq!(
        wrong_password.json::<serde_json::Value>(),
        unknown_user.json::<serde_json::Value>()
    );
}

#[tokio::test]
async fn missing_credentials_are_a_validation_error() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state);

    let response = server
        .post("/auth/login")
        .json(&json!({ "username": "alice" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert!(body["error"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn every_protected_endpoint_requires_a_session() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state);

    for path in [
        "/auth",
        "/motorcycle",
        "/maintenance-types",
        "/maintenance",
        "/alerts",
        "/stats",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body = response.json::<serde_json::Value>();
        assert!(body["error"].is_string(), "{path} should answer an error");
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn a_tampered_cookie_is_rejected() {
    let (state, _repos) = common::create_test_state();
    state
        .auth_service
        .provision_user("alice", "hunter2")
        .await
        .unwrap();

    // Fresh server, nothing in the cookie jar besides our forgery.
    let server = common::server(state);
    let response = server
        .get("/auth")
        .add_header("cookie", "auth_token=not.a.token")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;

    server.get("/auth").await.assert_status_ok();

    let response = server.post("/auth/logout").await;
    response.assert_status_ok();
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));

    // The cleared cookie is saved back into the jar, so the session is gone.
    server.get("/auth").await.assert_status(StatusCode::UNAUTHORIZED);
}
