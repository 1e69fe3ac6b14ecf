use sqlx::migrate::Migrator;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::time::Duration;
use thiserror::Error;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the local database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Single-connection in-memory database; every query sees the same data.
    pub fn in_memory() -> Self {
        Self {
            connection_string: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Creates a SQLite connection pool
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Failed to open {}: {}", config.connection_string, e);
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs the migrations embedded at build time
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await.map_err(|e| {
        tracing::error!("Failed to migrate local database: {}", e);
        DatabaseError::MigrationError
    })
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = create_sqlite_pool(&DatabaseConfig::in_memory())
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
