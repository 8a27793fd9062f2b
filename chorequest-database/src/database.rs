use anyhow::Context as _;
use sqlx::{PgPool, Postgres, Transaction, migrate::Migrator};

use crate::cache::CacheService;

/// Compile-time discovered SQLx migrations for the `chorequest-database` crate.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Shared handle to the chore store: Postgres pool plus the optional cache.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
    cache: CacheService,
}

impl Database {
    /// Create a database handle from an existing pool, without caching.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            cache: CacheService::disabled("chorequest:prod"),
        }
    }

    /// Create a database handle from an existing pool and cache service.
    pub fn with_cache(pool: PgPool, cache: CacheService) -> Self {
        Self { pool, cache }
    }

    /// Expose the underlying pool for query modules.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Expose the cache service for query modules.
    pub fn cache(&self) -> &CacheService {
        &self.cache
    }

    /// Start a transaction for writes that touch more than one table
    /// (balances, scores and the row that triggered them).
    pub async fn begin(&self) -> anyhow::Result<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .context("failed to start database transaction")
    }
}
