//! Redis-backed counter store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

use crate::domain::errors::StoreError;
use crate::domain::repositories::CounterStore;

/// Sequence counters kept as Redis integers.
///
/// `INCR` is atomic and treats a missing key as zero, which gives the
/// upsert-on-first-use semantics directly. Durability follows the Redis
/// persistence settings (AOF with `appendfsync always` for no lost values).
pub struct RedisCounterStore {
    connection: ConnectionManager,
    key_prefix: String,
}

impl RedisCounterStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        info!("Connecting to Redis counter store");

        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;

        let mut conn = connection.clone();
        conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self {
            connection,
            key_prefix: "seq:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, namespace: &str) -> String {
        format!("{}{}", self.key_prefix, namespace)
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment_and_get(&self, namespace: &str) -> Result<i64, StoreError> {
        let mut conn = self.connection.clone();
        let value = conn.incr::<_, _, i64>(self.build_key(namespace), 1).await?;
        Ok(value)
    }

    async fn current(&self, namespace: &str) -> Result<Option<i64>, StoreError> {
        let mut conn = self.connection.clone();
        let value = conn
            .get::<_, Option<i64>>(self.build_key(namespace))
            .await?;
        Ok(value)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        conn.ping::<()>().await.is_ok()
    }
}
