//! API routes and handlers
//!
//! This module defines the JSON endpoints mounted under `/api/v1`.

use axum::{middleware, routing::get, Router};

use crate::{middleware::api_cache_control_middleware, AppState};

mod gages;
mod health;

pub use health::*;

/// Public API routes (no authentication required)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness))
        // Stream gage GeoJSON
        .merge(gages::routes())
        .layer(middleware::from_fn(api_cache_control_middleware))
}
