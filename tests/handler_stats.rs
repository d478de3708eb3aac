mod common;

use chrono::NaiveDate;
use serde_json::json;

#[tokio::test]
async fn stats_are_zero_without_a_motorcycle_or_records() {
    let (state, _repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;

    let response = server.get("/stats").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "total_count": 0,
            "total_cost": 0.0,
            "average_cost": 0.0,
            "last_maintenance_date": null
        })
    );

    // Registering a motorcycle without records changes nothing.
    common::register_motorcycle(&server, "CB300F").await;
    let response = server.get("/stats").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total_count"], 0);
}

#[tokio::test]
async fn stats_aggregate_count_cost_and_latest_date() {
    let (state, repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;
    let motorcycle_id = common::register_motorcycle(&server, "CB300F").await;

    let oil = common::seed_type(&repos, "Oil change", 3000, Some(3)).await;
    let chain = common::seed_type(&repos, "Drive chain service", 500, Some(1)).await;

    let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
    common::seed_record(&repos, motorcycle_id, chain, d(1, 5), 500, Some(50.0)).await;
    common::seed_record(&repos, motorcycle_id, oil, d(1, 10), 1000, Some(350.0)).await;
    common::seed_record(&repos, motorcycle_id, oil, d(3, 15), 3000, Some(120.0)).await;

    let response = server.get("/stats").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["total_cost"], 520.0);
    assert!((body["average_cost"].as_f64().unwrap() - 173.333).abs() < 0.001);
    assert_eq!(body["last_maintenance_date"], "2025-03-15");
}

#[tokio::test]
async fn records_without_cost_count_but_do_not_skew_the_average() {
    let (state, repos) = common::create_test_state();
    let server = common::server(state.clone());
    common::login_as(&server, &state, "alice", "hunter2").await;
    let motorcycle_id = common::register_motorcycle(&server, "CB300F").await;

    let oil = common::seed_type(&repos, "Oil change", 3000, None).await;
    let d = |day| NaiveDate::from_ymd_opt(2025, 2, day).unwrap();
    common::seed_record(&repos, motorcycle_id, oil, d(1), 500, Some(100.0)).await;
    common::seed_record(&repos, motorcycle_id, oil, d(10), 900, None).await;

    let body = server.get("/stats").await.json::<serde_json::Value>();
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["total_cost"], 100.0);
    assert_eq!(body["average_cost"], 100.0);
}
