//! In-memory repository implementations.
//!
//! A first-class storage backend implementing the same repository traits as
//! the PostgreSQL layer, selected explicitly with `STORE=memory`. It is
//! never substituted silently: when PostgreSQL is configured and
//! unreachable, startup fails instead of falling back here.
//!
//! Data lives in [`MemStore`], a set of `RwLock`'d tables shared by the
//! per-entity repositories. The integration tests run against this backend.

mod repositories;
mod store;

pub use repositories::{
    MemAlertRepository, MemMaintenanceTypeRepository, MemMotorcycleRepository,
    MemRecordRepository, MemStatsRepository, MemUserRepository,
};
pub use store::MemStore;
