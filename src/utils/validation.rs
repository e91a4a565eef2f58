//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for validating usernames
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._@+-]*$").unwrap()
});

/// Regex for validating URL mount paths such as `/apps/my-first-app`
static MOUNT_PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(/[a-zA-Z0-9._-]+)*/?$").unwrap()
});

/// Validate a username
pub fn validate_username(username: &str) -> bool {
    !username.is_empty() && username.len() <= 150 && USERNAME_REGEX.is_match(username)
}

/// Validate a path under which routes are mounted
pub fn validate_mount_path(path: &str) -> bool {
    path.starts_with('/') && MOUNT_PATH_REGEX.is_match(path)
}

/// Check that a post-login redirect target stays on this site
///
/// Only absolute paths are accepted. Protocol-relative URLs (`//host`) and
/// backslash tricks are rejected.
pub fn is_local_redirect(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.starts_with("/\\")
        && !target.chars().any(|c| c.is_control())
}

/// Pick the post-login redirect, falling back when `next` is absent or unsafe
pub fn safe_redirect_target(next: Option<&str>, fallback: &str) -> String {
    match next {
        Some(target) if is_local_redirect(target) => target.to_string(),
        _ => fallback.to_string(),
    }
}
