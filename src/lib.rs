//! My First App Library
//!
//! Server-side rendered stream gage map application: page controllers, map
//! and text input widgets, a session login flow and a small GeoJSON API over
//! a SQLite persistent store.

use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod api;
pub mod config;
pub mod db;
pub mod gizmos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod templates;
pub mod utils;

pub use config::AppConfig;
pub use db::DbPool;
pub use middleware::{AuthUser, Claims, RateLimitState};
pub use templates::RenderContext;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Database connection pool
    pub db: DbPool,
    /// Per-IP limiter for login submissions
    pub login_rate_limit: RateLimitState,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool) -> Self {
        Self {
            config,
            db,
            login_rate_limit: RateLimitState::new(middleware::rate_limit::login_rate_limit_config()),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Configure tracing for HTTP requests
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .nest("/api/v1", api::public_routes())
        .merge(handlers::routes(&state))
        .with_state(state)
        // Global layers: security headers, compression, request tracing
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(trace_layer)
}
