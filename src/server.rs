//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, migrations, and the Axum
//! server lifecycle.

use crate::application::services::LinkService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{CounterStore, LinkStore};
use crate::domain::sequence::SequenceAllocator;
use crate::infrastructure::memory::{MemoryCounterStore, MemoryLinkStore};
use crate::infrastructure::persistence::{PgCounterStore, PgLinkStore, RedisCounterStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool with the configured limits and applies migrations.
///
/// # Errors
///
/// Returns an error if no database is configured, the connection fails, or a
/// migration cannot be applied.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    Ok(pool)
}

/// Wires the link service for the configured backends.
///
/// - `postgres`: links in PostgreSQL, counter in PostgreSQL unless Redis is set
/// - `memory`: links in process memory, counter in memory unless Redis is set
///
/// # Errors
///
/// Returns an error if a configured backend cannot be reached.
pub async fn build_link_service(config: &Config) -> Result<LinkService> {
    let (pg_counter, link_store): (Option<Arc<dyn CounterStore>>, Arc<dyn LinkStore>) =
        match config.storage_backend {
            StorageBackend::Postgres => {
                let pool = Arc::new(connect_database(config).await?);
                let counter: Arc<dyn CounterStore> = Arc::new(PgCounterStore::new(pool.clone()));
                (Some(counter), Arc::new(PgLinkStore::new(pool)))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; links are lost on restart");
                (None, Arc::new(MemoryLinkStore::new()))
            }
        };

    let counter_store: Arc<dyn CounterStore> = match (&config.redis_url, pg_counter) {
        (Some(redis_url), _) => {
            let redis = RedisCounterStore::connect(redis_url)
                .await
                .context("Failed to connect to Redis counter store")?;
            tracing::info!("Sequence counter: Redis");
            Arc::new(redis)
        }
        (None, Some(pg)) => {
            tracing::info!("Sequence counter: PostgreSQL");
            pg
        }
        (None, None) => {
            tracing::info!("Sequence counter: in-memory");
            Arc::new(MemoryCounterStore::new())
        }
    };

    let allocator = SequenceAllocator::new(counter_store, config.sequence_namespace.clone())
        .with_timeout(config.store_timeout());

    Ok(LinkService::new(allocator, link_store, config.code_encoder()?)
        .with_base_url(config.base_url.clone())
        .with_store_timeout(config.store_timeout()))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link and counter stores (PostgreSQL, Redis, or in-memory)
/// - Database migrations
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - A store cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_service = build_link_service(&config).await?;

    let state = AppState::new(Arc::new(link_service));
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
