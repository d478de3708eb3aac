//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential checks and session tokens
//! - [`services::motorcycle_service::MotorcycleService`] - Upsert and mileage policy
//! - [`services::maintenance_service::MaintenanceService`] - Records and their side effects
//! - [`services::alert_service::AlertService`] - Alert generation and completion
//! - [`services::stats_service::StatsService`] - Aggregate statistics

pub mod services;
