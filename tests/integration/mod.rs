//! Integration tests for My First App
//!
//! These tests drive the full router (pages, API and all middleware) against
//! a temporary SQLite store created and destroyed per test case.

mod accounts_tests;
mod echo_name_tests;
mod home_tests;
mod map_tests;
