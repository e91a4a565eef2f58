//! HTML page controllers and their routes
//!
//! Application pages are registered at absolute paths below the configured
//! mount point; the account pages live at the configured login/logout paths.

use axum::{
    handler::Handler,
    http::{header, HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{
    middleware::{auth::authenticate_headers, login_required_middleware, rate_limit_middleware, AuthUser},
    AppState,
};

pub mod accounts;
pub mod echo_name;
pub mod home;
pub mod map;

/// Plain `302 Found` redirect
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Signed-in user of a page that does not require a login
pub fn current_user(headers: &HeaderMap, state: &AppState) -> Option<AuthUser> {
    authenticate_headers(headers, &state.config.auth).ok()
}

/// Page routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let app = &state.config.app;

    let protected = Router::new()
        .route(&app.page(""), get(home::index))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            login_required_middleware,
        ));

    let login_submit = accounts::login.layer(middleware::from_fn_with_state(
        state.login_rate_limit.clone(),
        rate_limit_middleware,
    ));

    Router::new()
        .route(&app.page("map/"), get(map::all_gages))
        .route(&app.page("map/{id}/"), get(map::single_gage))
        .route(
            &app.page("echo-name/"),
            get(echo_name::form).post(echo_name::submit),
        )
        .route(
            &app.login_url,
            get(accounts::login_page).post(login_submit),
        )
        .route(
            &app.logout_url,
            get(accounts::logout).post(accounts::logout),
        )
        .merge(protected)
}
