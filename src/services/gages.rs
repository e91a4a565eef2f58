//! Stream gage lookups used by the map pages and the JSON API

use sqlx::SqlitePool;

use crate::{db::GageRepository, models::StreamGage, utils::error::AppError};

/// Read access to the stream gages in the persistent store
pub struct GageService {
    pool: SqlitePool,
}

impl GageService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All gages ordered by id
    pub async fn list(&self) -> Result<Vec<StreamGage>, AppError> {
        Ok(GageRepository::new(&self.pool).get_all().await?)
    }

    /// A single gage, `NotFound` when the id is unknown
    pub async fn get(&self, id: i64) -> Result<StreamGage, AppError> {
        GageRepository::new(&self.pool)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Gage {} not found", id)))
    }
}
