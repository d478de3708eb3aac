//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod alerts;
pub mod auth;
pub mod health;
pub mod maintenance;
pub mod motorcycle;
pub mod stats;

pub use alerts::{complete_alert_handler, list_alerts_handler, regenerate_alerts_handler};
pub use auth::{login_handler, logout_handler, session_handler};
pub use health::health_handler;
pub use maintenance::{create_record_handler, list_records_handler, maintenance_types_handler};
pub use motorcycle::{get_motorcycle_handler, update_mileage_handler, upsert_motorcycle_handler};
pub use stats::stats_handler;
