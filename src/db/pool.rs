//! Database connection pool management.

use crate::config::DatabaseConfig;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Creates a new database pool from the configuration.
    ///
    /// # Arguments
    /// * `config` - Database configuration with connection string and pool size.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&config.url)
            .await?;

        info!("Database connection pool established");

        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
