//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{
    AlertService, AuthService, MaintenanceService, MotorcycleService, StatsService,
};
use crate::config::StoreBackend;

/// Application state: the service layer plus the few config values the
/// handlers need directly. Constructed once at startup (or per test) and
/// cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub motorcycle_service: Arc<MotorcycleService>,
    pub maintenance_service: Arc<MaintenanceService>,
    pub alert_service: Arc<AlertService>,
    pub stats_service: Arc<StatsService>,
    /// Which storage backend the state was built on. Reported by the
    /// health endpoint.
    pub store_backend: StoreBackend,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}
