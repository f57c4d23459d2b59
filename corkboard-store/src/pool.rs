//! Connection lifecycle.
//!
//! [`Store::connect`] builds a `PgPool` and then preflights the entire
//! enumerated statement set on one checked-out connection: if any statement
//! fails to prepare (a table is missing, a column was renamed), connect
//! fails as a whole and no usable handle escapes. sqlx re-prepares and
//! caches the same statements per pooled connection at call time, so what
//! the preflight validated is what request paths execute.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::statements;

/// Default maximum connections for the pool. Kept small: this serves a
/// single campus board, not a fleet.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Handle to the open store. Cloning is cheap (the pool is shared).
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connect with the default pool size.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        Self::connect_with_options(config, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Connect with an explicit pool size.
    pub async fn connect_with_options(config: &StoreConfig, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(config.connect_options())
            .await
            .map_err(StoreError::Connect)?;

        if let Err(err) = preflight(&pool).await {
            pool.close().await;
            return Err(err);
        }

        tracing::info!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            "store connected"
        );
        Ok(Self { pool })
    }

    /// Build a pool without touching the network; connections are
    /// established on first use and nothing is preflighted. Useful to
    /// assemble a server for tests that never reach the store.
    pub fn connect_lazy(config: &StoreConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_lazy_with(config.connect_options());
        Self { pool }
    }

    /// Connect without the statement preflight.
    ///
    /// For schema management only: `CREATE TABLE` has to run before the
    /// statement set can compile, so the admin path cannot demand it.
    /// Serving paths must use [`Store::connect`].
    pub async fn connect_unchecked(config: &StoreConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(config.connect_options())
            .await
            .map_err(StoreError::Connect)?;
        tracing::info!(host = %config.host, port = config.port, "store connected (unchecked)");
        Ok(Self { pool })
    }

    /// The pool, for repositories and the schema manager.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the store. Safe to call when already closed: that case logs
    /// and returns false rather than failing. After any call, no further
    /// operation can succeed on this handle.
    pub async fn close(&self) -> bool {
        if self.pool.is_closed() {
            tracing::warn!("store close requested but the pool is already closed");
            return false;
        }
        self.pool.close().await;
        tracing::info!("store closed");
        true
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

/// Prepare every statement in [`statements::ALL`] against the live schema.
async fn preflight(pool: &PgPool) -> Result<()> {
    let mut conn = pool.acquire().await.map_err(StoreError::Connect)?;
    for &sql in statements::ALL {
        (&mut *conn)
            .prepare(sql)
            .await
            .map_err(|source| StoreError::Prepare {
                statement: sql,
                source,
            })?;
    }
    tracing::debug!(count = statements::ALL.len(), "statement preflight passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database.
    // Run with: DATABASE_URL=postgres://... cargo test -p corkboard-store -- --ignored

    fn test_config() -> StoreConfig {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        StoreConfig::from_url(&url, crate::DEFAULT_PG_PORT).expect("valid DATABASE_URL")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_preflights_and_answers_queries() {
        let cfg = test_config();
        let store = Store::connect(&cfg).await.expect("connect failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(store.pool())
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn close_is_idempotent_safe() {
        let cfg = test_config();
        let store = Store::connect(&cfg).await.expect("connect failed");

        assert!(store.close().await);
        assert!(!store.close().await);
        assert!(store.is_closed());
    }
}
