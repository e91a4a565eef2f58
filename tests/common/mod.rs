//! Common test utilities and helpers
//!
//! This module provides shared test infrastructure including:
//! - Test fixtures and factories
//! - Persistent store setup and teardown
//! - In-process HTTP test client with HTML inspection
#![allow(dead_code)]

pub mod fixtures;
pub mod html;

pub use factories::*;
pub use fixtures::*;
pub use html::*;
pub use test_app::*;
