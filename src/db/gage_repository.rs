//! Repository for stream gage records

use anyhow::{Context, Result};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::info;

use crate::models::{StreamGage, DEFAULT_GAGES};

/// Repository for stream gage operations
pub struct GageRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GageRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all gages ordered by id
    pub async fn get_all(&self) -> Result<Vec<StreamGage>> {
        let rows = sqlx::query("SELECT id, latitude, longitude, value FROM stream_gages ORDER BY id")
            .fetch_all(self.pool)
            .await
            .context("Failed to fetch stream gages")?;

        Ok(rows.iter().map(row_to_gage).collect())
    }

    /// Get a gage by id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<StreamGage>> {
        let row = sqlx::query("SELECT id, latitude, longitude, value FROM stream_gages WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .context("Failed to fetch stream gage")?;

        Ok(row.as_ref().map(row_to_gage))
    }

    /// Number of stored gages
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stream_gages")
            .fetch_one(self.pool)
            .await
            .context("Failed to count stream gages")?;
        Ok(count)
    }

    /// Insert a gage and return it with its assigned id
    pub async fn create(&self, latitude: f64, longitude: f64, value: i64) -> Result<StreamGage> {
        let result =
            sqlx::query("INSERT INTO stream_gages (latitude, longitude, value) VALUES (?, ?, ?)")
                .bind(latitude)
            .bind(longitude)
                .bind(value)
                .execute(self.pool)
                .await
                .context("Failed to insert stream gage")?;

        Ok(StreamGage {
            id: result.last_insert_rowid(),
            latitude,
            longitude,
            value,
        })
    }

    /// Remove every gage, returning how many were deleted
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM stream_gages")
            .execute(self.pool)
            .await
            .context("Failed to delete stream gages")?;
        Ok(result.rows_affected())
    }

    /// Write the default gages into an empty store
    ///
    /// Does nothing when the table already holds data, so it is safe to call
    /// on every startup. The defaults always get ids 1 to 4, also after the
    /// table was emptied. Returns the number of gages inserted.
    pub async fn seed_defaults(&self) -> Result<usize> {
        if self.count().await? > 0 {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.context("Failed to start transaction")?;
        for (id, (latitude, longitude, value)) in (1i64..).zip(DEFAULT_GAGES) {
            sqlx::query(
                "INSERT INTO stream_gages (id, latitude, longitude, value) VALUES (?, ?, ?, ?)",
            )
            .bind(id)
            .bind(latitude)
            .bind(longitude)
            .bind(value)
            .execute(&mut *tx)
            .await
            .context("Failed to seed stream gage")?;
        }
        tx.commit().await.context("Failed to commit gage seed")?;

        info!(count = DEFAULT_GAGES.len(), "Seeded stream gages");
        Ok(DEFAULT_GAGES.len())
    }
}

fn row_to_gage(row: &SqliteRow) -> StreamGage {
    StreamGage {
        id: row.get("id"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        value: row.get("value"),
    }
}
