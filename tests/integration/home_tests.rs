//! Home page access control

use axum::http::StatusCode;

use crate::common::{TestApp, TestUser};

#[tokio::test]
async fn test_home_redirects_anonymous_user_to_login() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("")).await;
    response.assert_found();
    let location = response.location().unwrap();
    assert!(location.starts_with(app.login_url()), "{}", location);
    assert!(location.ends_with("?next=%2Fapps%2Fmy-first-app%2F"), "{}", location);

    app.destroy().await;
}

#[tokio::test]
async fn test_home_redirect_chain_ends_on_login_page() {
    let app = TestApp::new().await;

    let response = app.get_follow(&app.url("")).await;
    response.assert_ok();
    assert_eq!(response.redirect_chain.len(), 1);
    assert_eq!(response.redirect_chain[0].1, StatusCode::FOUND);
    assert!(response.path.contains("login"), "{}", response.path);
    assert_eq!(
        response.context_value("next"),
        &serde_json::json!("/apps/my-first-app/")
    );

    app.destroy().await;
}

#[tokio::test]
async fn test_home_renders_for_authenticated_user() {
    let mut app = TestApp::new().await;
    let user = app.create_user(&TestUser::joe()).await;
    app.force_login(&user);

    let response = app.get(&app.url("")).await;
    response.assert_ok();
    assert!(response.redirect_chain.is_empty());
    assert_eq!(response.context_value("username"), "joe");
    assert_eq!(
        response.html().expect_element("h1-Welcome").text(),
        "Welcome, joe!"
    );

    app.destroy().await;
}

#[tokio::test]
async fn test_home_rejects_tampered_session() {
    let app = TestApp::new().await;

    let request = axum::http::Request::builder()
        .uri(app.url(""))
        .header("Cookie", "session=not-a-valid-token")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.request(request).await;
    response.assert_found();

    app.destroy().await;
}

#[tokio::test]
async fn test_pages_carry_security_headers() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("map/")).await;
    response.assert_ok();
    assert_eq!(
        response.headers.get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert!(response.headers.contains_key("content-security-policy"));

    app.destroy().await;
}
