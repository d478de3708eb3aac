//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user accounts.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at, updated_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) => {
                if let Some(db) = e.as_database_error()
                    && db.is_unique_violation()
                {
                    return Err(AppError::bad_request(format!(
                        "username '{}' is already taken",
                        new_user.username
                    )));
                }
                Err(e.into())
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }
}
