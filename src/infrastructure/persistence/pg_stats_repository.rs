//! PostgreSQL implementation of the statistics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::MaintenanceStats;
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// PostgreSQL repository for aggregate maintenance statistics.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn maintenance_stats(&self, motorcycle_id: i64) -> Result<MaintenanceStats, AppError> {
        let stats = sqlx::query_as::<_, MaintenanceStats>(
            r#"
            SELECT
                COUNT(*) AS total_count,
                COALESCE(SUM(cost), 0)::double precision AS total_cost,
                COALESCE(AVG(cost), 0)::double precision AS average_cost,
                MAX(date) AS last_maintenance_date
            FROM maintenance_records
            WHERE motorcycle_id = $1
            "#,
        )
        .bind(motorcycle_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(stats)
    }
}
