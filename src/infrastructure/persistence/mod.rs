//! Durable store implementations.
//!
//! # Stores
//!
//! - [`PgLinkStore`] - Link records in PostgreSQL
//! - [`PgCounterStore`] - Sequence counters in PostgreSQL
//! - [`RedisCounterStore`] - Sequence counters in Redis (`INCR`)

mod db_error;
pub mod pg_counter_store;
pub mod pg_link_store;
pub mod redis_counter_store;

pub use pg_counter_store::PgCounterStore;
pub use pg_link_store::PgLinkStore;
pub use redis_counter_store::RedisCounterStore;
