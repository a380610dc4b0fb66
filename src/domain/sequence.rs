//! Sequence allocation for new short links.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::ShortenerError;
use crate::domain::repositories::{CounterStore, with_deadline};

/// Namespace used for short link sequence numbers.
pub const DEFAULT_NAMESPACE: &str = "urls";

/// Default upper bound for a single counter round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Issues strictly increasing sequence numbers from a [`CounterStore`].
///
/// Every call performs one atomic increment-and-read against the store; the
/// allocator itself holds no mutable state. A number whose link is never
/// persisted is simply skipped, there is no rollback.
#[derive(Clone)]
pub struct SequenceAllocator {
    store: Arc<dyn CounterStore>,
    namespace: String,
    timeout: Duration,
}

impl SequenceAllocator {
    /// Creates an allocator for `namespace` with [`DEFAULT_TIMEOUT`].
    pub fn new(store: Arc<dyn CounterStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-call storage timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Allocates the next sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::SequenceAllocation`] if the store fails, does
    /// not answer within the timeout, or hands back a negative value.
    pub async fn next_sequence(&self) -> Result<u64, ShortenerError> {
        let value = with_deadline(self.timeout, self.store.increment_and_get(&self.namespace))
            .await
            .map_err(|e| {
                tracing::error!(namespace = %self.namespace, error = %e, "Sequence allocation failed");
                ShortenerError::SequenceAllocation(e.to_string())
            })?;

        u64::try_from(value).map_err(|_| {
            ShortenerError::SequenceAllocation(format!(
                "counter {} returned negative value {}",
                self.namespace, value
            ))
        })
    }

    /// Last value handed out in this namespace, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::SequenceAllocation`] if the store cannot be read.
    pub async fn current(&self) -> Result<Option<i64>, ShortenerError> {
        with_deadline(self.timeout, self.store.current(&self.namespace))
            .await
            .map_err(|e| ShortenerError::SequenceAllocation(e.to_string()))
    }

    /// Checks if the counter backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}
