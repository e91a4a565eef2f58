//! Data models

mod gage;
mod user;

pub use gage::*;
pub use user::*;
