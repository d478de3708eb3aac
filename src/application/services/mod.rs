//! Business logic services for the application layer.

pub mod alert_service;
pub mod auth_service;
pub mod maintenance_service;
pub mod motorcycle_service;
pub mod stats_service;

pub use alert_service::AlertService;
pub use auth_service::{AuthService, SessionUser};
pub use maintenance_service::{MaintenanceService, RecordInput};
pub use motorcycle_service::{MileageUpdate, MotorcycleService};
pub use stats_service::StatsService;
