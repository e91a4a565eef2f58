//! Echo-name form

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::{
    gizmos::TextInputOptions,
    templates::{self, Page},
    AppState,
};

use super::current_user;

/// Form field carrying the name
pub const NAME_FIELD: &str = "name-input";

/// Posted echo-name form
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EchoNameForm {
    #[serde(rename = "name-input", default)]
    #[validate(length(max = 256, message = "Name must be at most 256 characters"))]
    pub name: String,
}

fn text_input(name: &str) -> TextInputOptions {
    TextInputOptions::new(NAME_FIELD, "Name")
        .placeholder("e.g.: Bob")
        .initial(name)
        .prepend("Hi,")
}

fn render(state: &AppState, headers: &HeaderMap, options: TextInputOptions, name: &str) -> Page {
    let user = current_user(headers, state);
    let html = templates::echo_name::render(
        &state.config.app,
        user.as_ref().map(|u| u.username.as_str()),
        &options,
        name,
    );

    let context = json!({
        "text_input_options": options,
        "name": name,
    });
    Page::new(context, html)
}

/// GET {root}/echo-name/
pub async fn form(State(state): State<AppState>, headers: HeaderMap) -> Page {
    render(&state, &headers, text_input(""), "")
}

/// POST {root}/echo-name/
///
/// An invalid name re-renders the form with the message and no greeting.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<EchoNameForm>,
) -> Response {
    match form.validate() {
        Ok(()) => render(&state, &headers, text_input(&form.name), &form.name).into_response(),
        Err(errors) => {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Invalid name".to_string());
            let options = text_input(&form.name).error(message);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                render(&state, &headers, options, ""),
            )
                .into_response()
        }
    }
}
