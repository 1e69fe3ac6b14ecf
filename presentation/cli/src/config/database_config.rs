use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://storefront.db?mode=rwc";

/// Initialize the local database from environment variables
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: sqlite://storefront.db?mode=rwc)
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let pool = create_sqlite_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
