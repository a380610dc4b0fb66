//! Store trait for namespaced sequence counters.

use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Persistent, namespaced counter with an atomic increment-and-read primitive.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCounterStore`] - `INSERT ... ON CONFLICT DO UPDATE RETURNING`
/// - [`crate::infrastructure::persistence::RedisCounterStore`] - `INCR`
/// - [`crate::infrastructure::memory::MemoryCounterStore`] - sharded in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increments the counter for `namespace` and returns the new value.
    ///
    /// A missing counter is created at zero before the increment, so the first
    /// call in a namespace returns `1`. Concurrent callers, including concurrent
    /// first callers, never observe the same value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the storage operation fails.
    async fn increment_and_get(&self, namespace: &str) -> Result<i64, StoreError>;

    /// Reads the current counter value without modifying it.
    ///
    /// Returns `Ok(None)` if nothing was allocated in `namespace` yet.
    async fn current(&self, namespace: &str) -> Result<Option<i64>, StoreError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
