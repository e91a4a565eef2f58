//! Echo-name form

use axum::http::StatusCode;
use rstest::rstest;

use crate::common::{first_name, TestApp};

#[rstest]
#[case("Jerry")]
#[case("Elaine")]
#[case("George")]
#[case("Kramer")]
#[tokio::test]
async fn test_echo_name_greets_posted_name(#[case] name: &str) {
    let app = TestApp::new().await;

    let response = app
        .post_form(&app.url("echo-name/"), &[("name-input", name)])
        .await;
    response.assert_ok();
    assert!(!response.context_value("text_input_options").is_null());
    assert_eq!(response.context_value("name"), name);
    assert_eq!(
        response.html().expect_element("h1-Greeting").text(),
        format!("Hello, {}!", name)
    );

    app.destroy().await;
}

#[tokio::test]
async fn test_echo_name_form_without_submission() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("echo-name/")).await;
    response.assert_ok();
    assert_eq!(response.context_value("name"), "");
    assert_eq!(
        response.context_value("text_input_options")["name"],
        "name-input"
    );

    let html = response.html();
    assert!(html.element_by_id("h1-Greeting").is_none());
    assert!(html.element_by_id("name-input").is_some());

    app.destroy().await;
}

#[tokio::test]
async fn test_echo_name_escapes_markup() {
    let app = TestApp::new().await;

    let response = app
        .post_form(&app.url("echo-name/"), &[("name-input", "<b>Newman</b>")])
        .await;
    response.assert_ok();
    assert!(!response.text().contains("<b>Newman</b>"));
    assert_eq!(
        response.html().expect_element("h1-Greeting").text(),
        "Hello, <b>Newman</b>!"
    );

    app.destroy().await;
}

#[tokio::test]
async fn test_echo_name_random_name() {
    let app = TestApp::new().await;
    let name = first_name();

    let response = app
        .post_form(&app.url("echo-name/"), &[("name-input", &name)])
        .await;
    response.assert_ok();
    assert_eq!(response.context_value("name"), name.as_str());

    app.destroy().await;
}

#[tokio::test]
async fn test_echo_name_missing_field_is_empty() {
    let app = TestApp::new().await;

    let response = app.post_form(&app.url("echo-name/"), &[]).await;
    response.assert_ok();
    assert_eq!(response.context_value("name"), "");
    assert!(response.html().element_by_id("h1-Greeting").is_none());

    app.destroy().await;
}

#[tokio::test]
async fn test_echo_name_rejects_overlong_name() {
    let app = TestApp::new().await;
    let name = "a".repeat(257);

    let response = app
        .post_form(&app.url("echo-name/"), &[("name-input", &name)])
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.context_value("name"), "");
    assert_eq!(
        response.context_value("text_input_options")["error"],
        "Name must be at most 256 characters"
    );

    let html = response.html();
    assert!(html.element_by_id("h1-Greeting").is_none());
    assert!(html.element_by_id("echo-name-form").is_some());
    assert!(response.text().contains("has-error"));

    app.destroy().await;
}
