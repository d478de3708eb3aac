//! HTTP server initialization and runtime setup.
//!
//! Handles storage backend construction, migrations, service wiring, and
//! the Axum server lifecycle.

use crate::application::services::{
    AlertService, AuthService, MaintenanceService, MotorcycleService, StatsService,
};
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::{
    AlertRepository, MaintenanceTypeRepository, MotorcycleRepository, RecordRepository,
    StatsRepository, UserRepository,
};
use crate::infrastructure::memory::{
    MemAlertRepository, MemMaintenanceTypeRepository, MemMotorcycleRepository, MemRecordRepository,
    MemStatsRepository, MemStore, MemUserRepository,
};
use crate::infrastructure::persistence::{
    PgAlertRepository, PgMaintenanceTypeRepository, PgMotorcycleRepository, PgRecordRepository,
    PgStatsRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// The full repository set behind one storage backend.
struct Repositories {
    users: Arc<dyn UserRepository>,
    motorcycles: Arc<dyn MotorcycleRepository>,
    types: Arc<dyn MaintenanceTypeRepository>,
    records: Arc<dyn RecordRepository>,
    alerts: Arc<dyn AlertRepository>,
    stats: Arc<dyn StatsRepository>,
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured storage backend (PostgreSQL pool + migrations, or the
///   in-memory store)
/// - The service layer and shared state
/// - The gated bootstrap user, when configured
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    if let Some(bootstrap) = &config.bootstrap_user {
        let created = state
            .auth_service
            .ensure_user(&bootstrap.username, &bootstrap.password)
            .await
            .map_err(|e| anyhow::anyhow!("failed to provision bootstrap user: {e}"))?;
        if created {
            tracing::warn!(
                username = %bootstrap.username,
                "provisioned bootstrap user from environment; rotate its password via the admin CLI"
            );
        }
    }

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Builds the application state on the configured storage backend.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let repositories = match config.store {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("database URL missing for the postgres store")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let pool = Arc::new(pool);
            Repositories {
                users: Arc::new(PgUserRepository::new(pool.clone())),
                motorcycles: Arc::new(PgMotorcycleRepository::new(pool.clone())),
                types: Arc::new(PgMaintenanceTypeRepository::new(pool.clone())),
                records: Arc::new(PgRecordRepository::new(pool.clone())),
                alerts: Arc::new(PgAlertRepository::new(pool.clone())),
                stats: Arc::new(PgStatsRepository::new(pool)),
            }
        }
        StoreBackend::Memory => {
            tracing::info!("Using the in-memory store");
            let store = MemStore::with_default_types();
            Repositories {
                users: Arc::new(MemUserRepository::new(store.clone())),
                motorcycles: Arc::new(MemMotorcycleRepository::new(store.clone())),
                types: Arc::new(MemMaintenanceTypeRepository::new(store.clone())),
                records: Arc::new(MemRecordRepository::new(store.clone())),
                alerts: Arc::new(MemAlertRepository::new(store.clone())),
                stats: Arc::new(MemStatsRepository::new(store)),
            }
        }
    };

    Ok(wire_state(repositories, config))
}

/// Wires the service layer over a repository set.
fn wire_state(repositories: Repositories, config: &Config) -> AppState {
    let Repositories {
        users,
        motorcycles,
        types,
        records,
        alerts,
        stats,
    } = repositories;

    let auth_service = Arc::new(AuthService::new(
        users,
        config.session_secret.clone(),
        config.password_signing_secret.clone(),
        config.session_ttl_seconds,
    ));

    let alert_service = Arc::new(AlertService::new(
        alerts.clone(),
        types.clone(),
        records.clone(),
        motorcycles.clone(),
    ));

    let maintenance_service = Arc::new(MaintenanceService::new(
        records,
        types,
        motorcycles.clone(),
        alerts,
        alert_service.clone(),
    ));

    let motorcycle_service = Arc::new(MotorcycleService::new(motorcycles.clone()));
    let stats_service = Arc::new(StatsService::new(stats, motorcycles));

    AppState {
        auth_service,
        motorcycle_service,
        maintenance_service,
        alert_service,
        stats_service,
        store_backend: config.store,
        cookie_secure: config.cookie_secure,
    }
}
