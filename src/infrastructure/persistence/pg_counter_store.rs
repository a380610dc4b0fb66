//! PostgreSQL implementation of the counter store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::db_error::map_sqlx_error;
use crate::domain::errors::StoreError;
use crate::domain::repositories::CounterStore;

/// Sequence counters stored in the `sequence_counters` table.
///
/// Allocation is a single `INSERT ... ON CONFLICT DO UPDATE ... RETURNING`
/// statement: the row is created on first use and concurrent first callers are
/// serialized by the primary key, so no two callers read the same value.
pub struct PgCounterStore {
    pool: Arc<PgPool>,
}

impl PgCounterStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterStore for PgCounterStore {
    async fn increment_and_get(&self, namespace: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sequence_counters (namespace, value)
            VALUES ($1, 1)
            ON CONFLICT (namespace)
            DO UPDATE SET value = sequence_counters.value + 1
            RETURNING value
            "#,
        )
        .bind(namespace)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, namespace))
    }

    async fn current(&self, namespace: &str) -> Result<Option<i64>, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT value FROM sequence_counters WHERE namespace = $1")
            .bind(namespace)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(e, namespace))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
