//! Repository trait for motorcycle data access.

use crate::domain::entities::{Motorcycle, MotorcyclePatch, NewMotorcycle};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the tracked motorcycle.
///
/// Each user owns at most one motorcycle; `find_by_user` returns the most
/// recently registered one when the convention is violated.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMotorcycleRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::MemMotorcycleRepository`] - in-memory backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MotorcycleRepository: Send + Sync {
    /// Registers a new motorcycle.
    async fn create(&self, new_motorcycle: NewMotorcycle) -> Result<Motorcycle, AppError>;

    /// Finds the motorcycle owned by a user.
    async fn find_by_user(&self, user_id: i64) -> Result<Option<Motorcycle>, AppError>;

    /// Applies a partial update.
    ///
    /// Only fields present in [`MotorcyclePatch`] are modified; `None`
    /// fields are unchanged. Also refreshes `last_update` when the patch
    /// touches `current_mileage`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no motorcycle matches `id`.
    async fn update(&self, id: i64, patch: MotorcyclePatch) -> Result<Motorcycle, AppError>;

    /// Sets the odometer reading and refreshes `last_update`.
    ///
    /// Returns `Ok(true)` if the motorcycle existed, `Ok(false)` otherwise.
    /// Monotonicity is the caller's policy, not enforced here.
    async fn set_mileage(&self, id: i64, mileage: i64) -> Result<bool, AppError>;
}
