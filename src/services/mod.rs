//! Business logic services

pub mod auth;
pub mod gages;

pub use auth::AuthService;
pub use gages::GageService;
