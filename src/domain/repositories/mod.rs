//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. Each trait has two
//! concrete implementations: a PostgreSQL one in
//! `crate::infrastructure::persistence` and an in-memory one in
//! `crate::infrastructure::memory`, selected by configuration at startup.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Credential storage
//! - [`MotorcycleRepository`] - The tracked motorcycle
//! - [`MaintenanceTypeRepository`] - Service schedule reference data
//! - [`RecordRepository`] - Logged service events
//! - [`AlertRepository`] - Pending maintenance reminders
//! - [`StatsRepository`] - Aggregate maintenance statistics
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall`; integration tests
//! in `tests/` exercise the memory backend through the HTTP surface.

pub mod alert_repository;
pub mod maintenance_type_repository;
pub mod motorcycle_repository;
pub mod record_repository;
pub mod stats_repository;
pub mod user_repository;

pub use alert_repository::AlertRepository;
pub use maintenance_type_repository::MaintenanceTypeRepository;
pub use motorcycle_repository::MotorcycleRepository;
pub use record_repository::RecordRepository;
pub use stats_repository::StatsRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use alert_repository::MockAlertRepository;
#[cfg(test)]
pub use maintenance_type_repository::MockMaintenanceTypeRepository;
#[cfg(test)]
pub use motorcycle_repository::MockMotorcycleRepository;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
