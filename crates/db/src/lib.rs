//! PostgreSQL persistence for the curriculum CMS.
//!
//! Provides pool construction, the startup health check, embedded
//! migrations, and one repository per entity implementing the gateway
//! traits from `bandroom_core::store`.

use std::time::Duration;

use bandroom_core::env::{self, ConfigError};
use sqlx::postgres::PgPoolOptions;

pub mod codec;
pub mod error;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Defaults used for every setting except the URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 0,
            idle_timeout_secs: 600,
            max_lifetime_secs: 7200,
            acquire_timeout_secs: 5,
        }
    }

    /// Load from a lookup function.
    ///
    /// | Env var                   | Default |
    /// |---------------------------|---------|
    /// | `DATABASE_URL`            | required |
    /// | `DB_MAX_CONNECTIONS`      | `20`    |
    /// | `DB_MIN_CONNECTIONS`      | `0`     |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `600`   |
    /// | `DB_MAX_LIFETIME_SECS`    | `7200`  |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`     |
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::with_url(env::required(lookup, "DATABASE_URL")?);
        Ok(Self {
            max_connections: env::parse_or(lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: env::parse_or(lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            idle_timeout_secs: env::parse_or(
                lookup,
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs,
            )?,
            max_lifetime_secs: env::parse_or(
                lookup,
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime_secs,
            )?,
            acquire_timeout_secs: env::parse_or(
                lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            ..defaults
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env)
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }
}

/// Create a connection pool and open the first connection.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    config.pool_options().connect(&config.url).await
}

/// Create a pool that connects on first use.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    config.pool_options().connect_lazy(&config.url)
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
