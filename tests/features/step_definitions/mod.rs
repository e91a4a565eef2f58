//! Step definitions for Cucumber scenarios

pub mod echo_name_steps;
pub mod map_steps;
