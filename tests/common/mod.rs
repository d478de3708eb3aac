#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use axum_test::TestServer;
use serde_json::json;

use motolog::api::handlers::{health_handler, login_handler, logout_handler};
use motolog::api::middleware::auth;
use motolog::application::services::{
    AlertService, AuthService, MaintenanceService, MotorcycleService, StatsService,
};
use motolog::config::StoreBackend;
use motolog::domain::entities::{NewMaintenanceType, NewRecord};
use motolog::domain::repositories::{MaintenanceTypeRepository, RecordRepository};
use motolog::infrastructure::memory::{
    MemAlertRepository, MemMaintenanceTypeRepository, MemMotorcycleRepository, MemRecordRepository,
    MemStatsRepository, MemStore, MemUserRepository,
};
use motolog::state::AppState;

/// Concrete memory repositories sharing the state's store, for seeding
/// directly from tests.
pub struct TestRepos {
    pub types: Arc<MemMaintenanceTypeRepository>,
    pub records: Arc<MemRecordRepository>,
    pub alerts: Arc<MemAlertRepository>,
}

/// Builds an [`AppState`] over a fresh, empty in-memory store.
///
/// Tests seed exactly the maintenance types they need instead of relying on
/// the default schedule.
pub fn create_test_state() -> (AppState, TestRepos) {
    let store = MemStore::new();

    let users = Arc::new(MemUserRepository::new(store.clone()));
    let motorcycles = Arc::new(MemMotorcycleRepository::new(store.clone()));
    let types = Arc::new(MemMaintenanceTypeRepository::new(store.clone()));
    let records = Arc::new(MemRecordRepository::new(store.clone()));
    let alerts = Arc::new(MemAlertRepository::new(store.clone()));
    let stats = Arc::new(MemStatsRepository::new(store));

    let auth_service = Arc::new(AuthService::new(
        users,
        "test-session-secret".to_string(),
        "test-password-secret".to_string(),
        3600,
    ));

    let alert_service = Arc::new(AlertService::new(
        alerts.clone(),
        types.clone(),
        records.clone(),
        motorcycles.clone(),
    ));

    let maintenance_service = Arc::new(MaintenanceService::new(
        records.clone(),
        types.clone(),
        motorcycles.clone(),
        alerts.clone(),
        alert_service.clone(),
    ));

    let motorcycle_service = Arc::new(MotorcycleService::new(motorcycles.clone()));
    let stats_service = Arc::new(StatsService::new(stats, motorcycles));

    let state = AppState {
        auth_service,
        motorcycle_service,
        maintenance_service,
        alert_service,
        stats_service,
        store_backend: StoreBackend::Memory,
        cookie_secure: false,
    };

    (
        state,
        TestRepos {
            types,
            records,
            alerts,
        },
    )
}

/// The application router as served in production, minus the rate limiter,
/// which needs a peer socket address the test transport does not provide.
pub fn app(state: AppState) -> Router {
    let protected = motolog::api::routes::protected_routes()
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::layer,
        ));

    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state)
}

/// A test server that keeps the session cookie between requests.
pub fn server(state: AppState) -> TestServer {
    let mut server = TestServer::new(app(state)).unwrap();
    server.save_cookies();
    server
}

/// Provisions a user and logs the server's cookie jar in.
pub async fn login_as(server: &TestServer, state: &AppState, username: &str, password: &str) {
    state
        .auth_service
        .provision_user(username, password)
        .await
        .unwrap();

    let response = server
        .post("/auth/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();
}

/// Seeds one maintenance type and returns its id.
pub async fn seed_type(
    repos: &TestRepos,
    name: &str,
    interval_km: i64,
    interval_months: Option<i32>,
) -> i64 {
    repos
        .types
        .create(NewMaintenanceType {
            name: name.to_string(),
            description: None,
            interval_km,
            interval_months,
            is_critical: true,
        })
        .await
        .unwrap()
        .id
}

/// Seeds one maintenance record directly, bypassing the side effects of
/// the HTTP path.
pub async fn seed_record(
    repos: &TestRepos,
    motorcycle_id: i64,
    maintenance_type_id: i64,
    date: chrono::NaiveDate,
    mileage: i64,
    cost: Option<f64>,
) -> i64 {
    repos
        .records
        .create(NewRecord {
            motorcycle_id,
            maintenance_type_id,
            date,
            mileage,
            cost,
            notes: None,
            parts_replaced: None,
            service_provider: None,
        })
        .await
        .unwrap()
        .id
}

/// Registers a motorcycle for the logged-in user via the API.
pub async fn register_motorcycle(server: &TestServer, model: &str) -> i64 {
    let response = server
        .post("/motorcycle")
        .json(&json!({ "model": model, "year": 2025 }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}
