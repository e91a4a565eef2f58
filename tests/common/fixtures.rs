//! Test fixtures for common test data
//!
//! Fixtures provide pre-defined test data that can be used across multiple tests.

/// Login account created by the test user fixture
#[derive(Debug, Clone, PartialEq)]
pub struct TestUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl TestUser {
    /// The standard test user
    pub fn joe() -> Self {
        Self {
            username: "joe".to_string(),
            email: "joe@some_site.com".to_string(),
            password: "secret".to_string(),
        }
    }
}

/// Ids of the seeded stream gages
pub const GAGE_IDS: [i64; 4] = [1, 2, 3, 4];

/// Names posted to the echo-name form
pub const ECHO_NAMES: [&str; 4] = ["Jerry", "Elaine", "George", "Kramer"];
