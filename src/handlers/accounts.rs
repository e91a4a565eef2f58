//! Login and logout pages

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    middleware::auth::{create_session_token, removal_cookie, session_cookie},
    models::LoginForm,
    services::AuthService,
    templates::{self, Page},
    utils::{
        error::{AppError, PageResult},
        validation::safe_redirect_target,
    },
    AppState,
};

use super::{current_user, found};

/// Message shown after a failed login
const INVALID_CREDENTIALS: &str = "Please enter a correct username and password.";

#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

fn login_form(state: &AppState, next: &str, username: &str, error: Option<&str>) -> Page {
    let context = json!({
        "next": next,
        "username": username,
        "error": error,
    });
    Page::new(
        context,
        templates::login::render(&state.config.app, next, username, error),
    )
}

/// GET {login_url}
///
/// Signed-in users go straight to `next`.
pub async fn login_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NextQuery>,
) -> Response {
    let next = safe_redirect_target(query.next.as_deref(), &state.config.app.page(""));
    if current_user(&headers, &state).is_some() {
        return found(&next);
    }
    login_form(&state, &next, "", None).into_response()
}

/// POST {login_url}
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> PageResult<Response> {
    let next = safe_redirect_target(form.next.as_deref(), &state.config.app.page(""));
    let service = AuthService::new(state.db.clone());

    let Some(user) = service.authenticate(&form.username, &form.password).await? else {
        warn!(username = %form.username, "Failed login attempt");
        return Ok(login_form(&state, &next, &form.username, Some(INVALID_CREDENTIALS)).into_response());
    };

    let auth = &state.config.auth;
    let token = create_session_token(&user, &auth.jwt_secret, auth.session_expiry_hours)
        .map_err(|e| AppError::Internal(format!("Failed to create session: {}", e)))?;

    info!(username = %user.username, next = %next, "User logged in");
    Ok((jar.add(session_cookie(auth, token)), found(&next)).into_response())
}

/// GET/POST {logout_url}
pub async fn logout(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> Response {
    if let Some(user) = current_user(&headers, &state) {
        info!(username = %user.username, "User logged out");
    }

    (
        jar.remove(removal_cookie(&state.config.auth)),
        found(&state.config.app.login_url),
    )
        .into_response()
}
