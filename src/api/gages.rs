//! Stream gage GeoJSON endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::{
    models::feature_collection,
    services::GageService,
    utils::error::AppResult,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/gages", get(list_gages))
        .route("/gages/{id}", get(get_gage))
}

/// GET /api/v1/gages
///
/// All gages as a GeoJSON FeatureCollection.
async fn list_gages(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let gages = GageService::new(state.db.clone()).list().await?;
    Ok(Json(feature_collection(&gages)))
}

/// GET /api/v1/gages/{id}
async fn get_gage(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Value>> {
    let gage = GageService::new(state.db.clone()).get(id).await?;
    Ok(Json(gage.to_feature()))
}
