//! SQLite implementation of the ProfileStore.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheKey, CachedProfile};
use crate::domain::ports::ProfileStore;

/// Cached profiles persisted as one JSON payload per key.
///
/// `cached_at` is duplicated into its own column purely for inspection with
/// a sqlite shell; the engine reads it from the payload.
#[derive(Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) a database file and ensure the schema.
    pub async fn connect(path: &str, max_connections: u32) -> DomainResult<Self> {
        let options =
            SqliteConnectOptions::from_str(&format!("sqlite://{path}"))?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Idempotent schema setup.
    pub async fn init_schema(&self) -> DomainResult<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS cached_profiles (
                cache_key TEXT PRIMARY KEY,
                payload TEXT NOT NULL,
                cached_at TEXT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn get(&self, key: &CacheKey) -> DomainResult<Option<CachedProfile>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT payload FROM cached_profiles WHERE cache_key = ?")
                .bind(key.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(payload,)| serde_json::from_str(&payload).map_err(Into::into))
            .transpose()
    }

    async fn put(&self, key: &CacheKey, profile: &CachedProfile) -> DomainResult<()> {
        let payload = serde_json::to_string(profile)?;

        sqlx::query(
            r#"INSERT INTO cached_profiles (cache_key, payload, cached_at)
               VALUES (?, ?, ?)
               ON CONFLICT(cache_key) DO UPDATE SET
                   payload = excluded.payload,
                   cached_at = excluded.cached_at"#,
        )
        .bind(key.to_string())
        .bind(payload)
        .bind(profile.cached_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
