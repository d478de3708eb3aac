mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;

#[tokio::test]
async fn types_are_listed_by_interval_ascending() {
    let (state, repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;

    common::seed_type(&repos, "Spark plug change", 24000, Some(24)).await;
    common::seed_type(&repos, "Drive chain service", 500, Some(1)).await;
    common::seed_type(&repos, "Oil change", 3000, Some(3)).await;

    let response = server.get("/maintenance-types").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Drive chain service", "Oil change", "Spark plug change"]
    );
}

#[tokio::test]
async fn records_list_is_empty_without_a_motorcycle() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;

    let response = server.get("/maintenance").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn records_come_back_newest_first_with_type_info() {
    let (state, repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;
    let motorcycle_id = common::register_motorcycle(&server, "CB300F").await;

    let oil = common::seed_type(&repos, "Oil change", 3000, Some(3)).await;
    let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
    common::seed_record(&repos, motorcycle_id, oil, d(1, 10), 1000, Some(350.0)).await;
    common::seed_record(&repos, motorcycle_id, oil, d(3, 15), 3000, Some(120.0)).await;

    let response = server.get("/maintenance").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date"], "2025-03-15");
    assert_eq!(records[1]["date"], "2025-01-10");
    assert_eq!(records[0]["type_name"], "Oil change");
    assert_eq!(records[0]["is_critical"], true);
}

#[tokio::test]
async fn creating_a_record_applies_every_side_effect() {
    let (state, repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;
    common::register_motorcycle(&server, "CB300F").await;

    let oil = common::seed_type(&repos, "Oil change", 3000, None).await;

    // Motorcycle at 0 km, no prior record: generation dues the alert at the
    // bare interval.
    server.put("/alerts").await.assert_status_ok();
    let alerts = server.get("/alerts").await.json::<serde_json::Value>();
    assert_eq!(alerts[0]["due_mileage"], 3000);

    // Submitting a record at 3200 km completes that alert, raises the
    // odometer to 3200, and generation dues the next one at 6200.
    let response = server
        .post("/maintenance")
        .json(&json!({
            "maintenance_type_id": oil,
            "date": "2025-04-15",
            "mileage": 3200,
            "cost": 120.0,
            "notes": "10W30 oil",
            "service_provider": "Dealer"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["success"], true);

    let motorcycle = server.get("/motorcycle").await.json::<serde_json::Value>();
    assert_eq!(motorcycle["current_mileage"], 3200);

    let open = server.get("/alerts").await.json::<serde_json::Value>();
    let open = open.as_array().unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0]["due_mileage"], 6200);

    let all = server
        .get("/alerts")
        .add_query_param("include_completed", "true")
        .await
        .json::<serde_json::Value>();
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn a_lower_mileage_record_leaves_the_odometer_alone() {
    let (state, repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;
    common::register_motorcycle(&server, "CB300F").await;
    let oil = common::seed_type(&repos, "Oil change", 3000, None).await;

    server
        .post("/motorcycle/mileage")
        .json(&json!({ "mileage": 5000 }))
        .await
        .assert_status_ok();

    // Backdated record below the current reading.
    server
        .post("/maintenance")
        .json(&json!({
            "maintenance_type_id": oil,
            "date": "2025-01-10",
            "mileage": 2000
        }))
        .await
        .assert_status_ok();

    let motorcycle = server.get("/motorcycle").await.json::<serde_json::Value>();
    assert_eq!(motorcycle["current_mileage"], 5000);
}

#[tokio::test]
async fn unknown_type_and_missing_motorcycle_are_rejected() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;

    // No motorcycle yet.
    let response = server
        .post("/maintenance")
        .json(&json!({ "maintenance_type_id": 1, "date": "2025-04-15", "mileage": 100 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    common::register_motorcycle(&server, "CB300F").await;

    // Unknown maintenance type.
    let response = server
        .post("/maintenance")
        .json(&json!({ "maintenance_type_id": 42, "date": "2025-04-15", "mileage": 100 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
