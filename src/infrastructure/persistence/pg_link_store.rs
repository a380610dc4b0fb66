//! PostgreSQL implementation of the link store.
//!
//! Queries are checked at runtime (`query_as`/`query_scalar`) so the crate
//! builds without a database or a `.sqlx` offline cache.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::db_error::map_sqlx_error;
use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::StoreError;
use crate::domain::repositories::LinkStore;

type LinkRow = (String, String, i64, DateTime<Utc>);

fn into_link((code, original_url, clicks, created_at): LinkRow) -> Link {
    Link::new(code, original_url, clicks, created_at)
}

/// PostgreSQL store for link records.
///
/// Uses bound parameters for every statement; click increments are a single
/// `UPDATE ... RETURNING` so concurrent resolves never lose a click.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, original_url)
            VALUES ($1, $2)
            RETURNING code, original_url, clicks, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, &new_link.code))?;

        Ok(into_link(row))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        // LIMIT 2 is enough to tell "one" from "more than one".
        let mut rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, original_url, clicks, created_at
            FROM links
            WHERE code = $1
            LIMIT 2
            "#,
        )
        .bind(code)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, code))?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop().map(into_link)),
            matches => Err(StoreError::Ambiguous {
                code: code.to_owned(),
                matches,
            }),
        }
    }

    async fn increment_clicks(&self, code: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE links SET clicks = clicks + 1 WHERE code = $1 RETURNING clicks",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| map_sqlx_error(e, code))?
        .ok_or_else(|| StoreError::Missing(code.to_owned()))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| map_sqlx_error(e, "links"))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
