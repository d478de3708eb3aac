//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! prepared statements with runtime-checked queries mapped through
//! `sqlx::FromRow` on the entities.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Credential storage
//! - [`PgMotorcycleRepository`] - The tracked motorcycle
//! - [`PgMaintenanceTypeRepository`] - Service schedule reference data
//! - [`PgRecordRepository`] - Logged service events
//! - [`PgAlertRepository`] - Maintenance alerts
//! - [`PgStatsRepository`] - Aggregate statistics

pub mod pg_alert_repository;
pub mod pg_maintenance_type_repository;
pub mod pg_motorcycle_repository;
pub mod pg_record_repository;
pub mod pg_stats_repository;
pub mod pg_user_repository;

pub use pg_alert_repository::PgAlertRepository;
pub use pg_maintenance_type_repository::PgMaintenanceTypeRepository;
pub use pg_motorcycle_repository::PgMotorcycleRepository;
pub use pg_record_repository::PgRecordRepository;
pub use pg_stats_repository::PgStatsRepository;
pub use pg_user_repository::PgUserRepository;
