//! In-memory implementation of the counter store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::errors::StoreError;
use crate::domain::repositories::CounterStore;

/// Process-local counters keyed by namespace.
///
/// The increment and the read happen while holding the entry's shard lock, so
/// allocation is linearizable per namespace. Values are lost on restart; use
/// this for tests and single-process demos only.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counters: DashMap<String, i64>,
}

impl MemoryCounterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose `namespace` counter already holds `value`.
    ///
    /// The next allocation in that namespace returns `value + 1`.
    pub fn starting_at(namespace: impl Into<String>, value: i64) -> Self {
        let store = Self::new();
        store.counters.insert(namespace.into(), value);
        store
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment_and_get(&self, namespace: &str) -> Result<i64, StoreError> {
        let mut counter = self.counters.entry(namespace.to_owned()).or_insert(0);
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend(format!("counter {namespace} is exhausted")))?;
        Ok(*counter)
    }

    async fn current(&self, namespace: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.counters.get(namespace).map(|value| *value))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_upsert_on_first_use() {
        let store = MemoryCounterStore::new();

        assert_eq!(store.current("urls").await.unwrap(), None);
        assert_eq!(store.increment_and_get("urls").await.unwrap(), 1);
        assert_eq!(store.current("urls").await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_starting_at() {
        let store = MemoryCounterStore::starting_at("urls", 61);
        assert_eq!(store.increment_and_get("urls").await.unwrap(), 62);
    }

    #[tokio::test]
    async fn test_exhausted_counter_fails() {
        let store = MemoryCounterStore::starting_at("urls", i64::MAX);
        let err = store.increment_and_get("urls").await.unwrap_err();

        assert!(matches!(err, StoreError::Backend(_)));
        assert_eq!(store.current("urls").await.unwrap(), Some(i64::MAX));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_use() {
        let store = Arc::new(MemoryCounterStore::new());

        let mut handles = Vec::new();
        for _ in 0..200 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.increment_and_get("fresh").await.unwrap()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            seen.insert(handle.await.unwrap());
        }

        assert_eq!(seen.len(), 200);
        assert_eq!(store.current("fresh").await.unwrap(), Some(200));
    }
}
