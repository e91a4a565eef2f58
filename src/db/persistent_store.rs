//! Creation and removal of the application's persistent store
//!
//! A store is a SQLite database with all migrations applied and, optionally,
//! the default stream gages. The test fixtures create one store per test case
//! and destroy it afterwards.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{init_pool, DbPool, GageRepository};
use crate::config::DatabaseConfig;

/// Create (or open) the store described by `config`
///
/// When `seed` is set the default gages are written into an empty store.
pub async fn create_persistent_store(config: &DatabaseConfig, seed: bool) -> Result<DbPool> {
    let pool = init_pool(config).await?;

    if seed {
        let inserted = GageRepository::new(&pool).seed_defaults().await?;
        debug!(inserted, "Persistent store initialized");
    }

    Ok(pool)
}

/// Close the pool and delete the database files backing it
///
/// In-memory databases have nothing on disk and are simply closed.
pub async fn destroy_persistent_store(pool: DbPool, config: &DatabaseConfig) -> Result<()> {
    pool.close().await;

    let Some(path) = sqlite_file_path(&config.url) else {
        return Ok(());
    };

    for suffix in ["", "-wal", "-shm", "-journal"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let file = PathBuf::from(file);
        if file.exists() {
            std::fs::remove_file(&file)
                .with_context(|| format!("Failed to remove store file {:?}", file))?;
        }
    }

    info!(path = ?path, "Persistent store destroyed");
    Ok(())
}

/// File path of a SQLite database URL, `None` for in-memory databases
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
