//! Middleware components
//!
//! This module contains middleware for:
//! - Session authentication (login required)
//! - Security and cache headers
//! - Rate limiting

pub mod auth;
pub mod rate_limit;
pub mod security_headers;

pub use auth::{login_required_middleware, AuthUser, Claims};
pub use rate_limit::{rate_limit_middleware, RateLimitState};
pub use security_headers::{api_cache_control_middleware, security_headers_middleware};
