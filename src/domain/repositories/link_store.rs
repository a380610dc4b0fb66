//! Store trait for short link records.

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Persistence for `{code, original_url, clicks}` records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryLinkStore`] - in-process map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the code already exists.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if exactly one record matches
    /// - `Ok(None)` if none does
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Ambiguous`] if more than one record matches.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Atomically increments the click counter and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] if no link has this code.
    /// Returns [`StoreError::Backend`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<i64, StoreError>;

    /// Counts stored links.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
