//! Database migrations
//!
//! Migrations are handled by SQLx and stored in the `migrations/` directory.
//! They are embedded into the binary at compile time.

use anyhow::{Context, Result};
use sqlx::{migrate::Migrator, SqlitePool};

/// Embedded migrator for the persistent store
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all pending migrations
pub async fn run(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    Ok(())
}

/// Check that the store answers queries and every embedded migration is applied
pub async fn check_migrations(pool: &SqlitePool) -> Result<bool> {
    let applied: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = 1")
            .fetch_one(pool)
            .await
            .context("Failed to read migration status")?;

    Ok(applied as usize >= MIGRATOR.iter().count())
}
