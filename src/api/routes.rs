//! API route configuration.
//!
//! All routes here require a session cookie via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    complete_alert_handler, create_record_handler, get_motorcycle_handler, list_alerts_handler,
    list_records_handler, maintenance_types_handler, regenerate_alerts_handler, session_handler,
    stats_handler, update_mileage_handler, upsert_motorcycle_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All session-protected routes.
///
/// # Endpoints
///
/// - `GET  /auth`                - Current session echo
/// - `GET  /motorcycle`          - The caller's motorcycle
/// - `POST /motorcycle`          - Create or partially update it
/// - `POST /motorcycle/mileage`  - Set the odometer (rejects decreases)
/// - `GET  /maintenance-types`   - Service schedule reference list
/// - `GET  /maintenance`         - Maintenance records, most recent first
/// - `POST /maintenance`         - Log a record (with side effects)
/// - `GET  /alerts`              - Open alerts (due mileage ascending)
/// - `POST /alerts`              - Complete one alert
/// - `PUT  /alerts`              - Regenerate alerts
/// - `GET  /stats`               - Aggregate statistics
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", get(session_handler))
        .route(
            "/motorcycle",
            get(get_motorcycle_handler).post(upsert_motorcycle_handler),
        )
        .route("/motorcycle/mileage", post(update_mileage_handler))
        .route("/maintenance-types", get(maintenance_types_handler))
        .route(
            "/maintenance",
            get(list_records_handler).post(create_record_handler),
        )
        .route(
            "/alerts",
            get(list_alerts_handler)
                .post(complete_alert_handler)
                .put(regenerate_alerts_handler),
        )
        .route("/stats", get(stats_handler))
}
