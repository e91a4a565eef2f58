//! Health endpoints
//!
//! `/health` answers whenever the process serves requests. `/health/ready`
//! additionally requires a migrated store that holds the stream gages the map
//! pages are built from.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    db::migrations::check_migrations,
    services::GageService,
    utils::error::{AppError, AppResult},
    AppState,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
    pub version: &'static str,
}

/// What the map pages can currently serve
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub version: &'static str,
    pub gage_count: usize,
    /// Ids reachable under `map/{id}/`
    pub gage_ids: Vec<i64>,
}

/// GET /api/v1/health
pub async fn health_check() -> Json<Liveness> {
    Json(Liveness {
        status: "ok",
        version: VERSION,
    })
}

/// GET /api/v1/health/ready
///
/// 503 while migrations are pending or no gage has been stored yet.
pub async fn readiness(State(state): State<AppState>) -> AppResult<Json<Readiness>> {
    let migrated = check_migrations(&state.db)
        .await
        .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;
    if !migrated {
        return Err(AppError::ServiceUnavailable(
            "Persistent store has pending migrations".to_string(),
        ));
    }

    let gages = GageService::new(state.db.clone()).list().await?;
    if gages.is_empty() {
        return Err(AppError::ServiceUnavailable(
            "No stream gages in the persistent store".to_string(),
        ));
    }

    Ok(Json(Readiness {
        status: "ready",
        version: VERSION,
        gage_count: gages.len(),
        gage_ids: gages.iter().map(|gage| gage.id).collect(),
    }))
}
