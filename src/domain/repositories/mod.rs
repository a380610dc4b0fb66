//! Storage trait definitions for the domain layer.
//!
//! The shortening core depends only on these traits. Concrete stores live in
//! `crate::infrastructure`, and mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Stores
//!
//! - [`CounterStore`] - Namespaced atomic sequence counters
//! - [`LinkStore`] - Short link records and click counters
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod counter_store;
pub mod link_store;

use std::future::Future;
use std::time::Duration;

pub use counter_store::CounterStore;
pub use link_store::LinkStore;

#[cfg(test)]
pub use counter_store::MockCounterStore;
#[cfg(test)]
pub use link_store::MockLinkStore;

use crate::domain::errors::StoreError;

/// Runs a store operation with an upper bound on its duration.
///
/// The operation is dropped when the deadline passes and [`StoreError::Timeout`]
/// is returned in its place.
pub async fn with_deadline<T, F>(limit: Duration, operation: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(limit, operation)
        .await
        .map_err(|_| StoreError::Timeout(limit))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_deadline_passes_result_through() {
        let ok = with_deadline(Duration::from_secs(1), async { Ok::<_, StoreError>(7) }).await;
        assert_eq!(ok, Ok(7));

        let err = with_deadline(Duration::from_secs(1), async {
            Err::<i64, _>(StoreError::Missing("x".into()))
        })
        .await;
        assert_eq!(err, Err(StoreError::Missing("x".into())));
    }

    #[tokio::test]
    async fn test_with_deadline_times_out() {
        let limit = Duration::from_millis(10);
        let result = with_deadline(limit, std::future::pending::<Result<i64, StoreError>>()).await;
        assert_eq!(result, Err(StoreError::Timeout(limit)));
    }
}
