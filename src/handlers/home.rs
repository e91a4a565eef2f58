//! Home page of a signed-in user

use axum::extract::State;
use serde_json::json;

use crate::{
    middleware::AuthUser,
    templates::{self, Page},
    AppState,
};

/// GET {root}/
///
/// Only reachable behind the login-required middleware.
pub async fn index(State(state): State<AppState>, user: AuthUser) -> Page {
    let context = json!({
        "username": user.username,
        "app_title": state.config.app.title,
    });
    Page::new(
        context,
        templates::home::render(&state.config.app, &user.username),
    )
}
