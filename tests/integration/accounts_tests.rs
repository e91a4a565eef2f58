//! Login and logout

use axum::http::StatusCode;

use crate::common::{TestApp, TestUser, UserFactory};

#[tokio::test]
async fn test_login_page_renders_form() {
    let app = TestApp::new().await;

    let response = app.get(app.login_url()).await;
    response.assert_ok();
    let html = response.html();
    assert!(html.element_by_id("login-form").is_some());
    assert!(html.element_by_id("login-error").is_none());

    app.destroy().await;
}

#[tokio::test]
async fn test_login_sets_session_and_redirects_to_next() {
    let mut app = TestApp::new().await;
    let joe = TestUser::joe();
    app.create_user(&joe).await;

    let next = app.url("map/2/");
    let response = app.login(&joe.username, &joe.password, Some(&next)).await;
    response.assert_found();
    assert_eq!(response.location(), Some(next.as_str()));
    assert!(app.has_session());

    let set_cookie = response
        .headers
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));

    let home = app.get(&app.url("")).await;
    home.assert_ok();
    assert_eq!(home.context_value("username"), "joe");

    app.destroy().await;
}

#[tokio::test]
async fn test_login_with_wrong_password_sets_no_cookie() {
    let mut app = TestApp::new().await;
    let joe = TestUser::joe();
    app.create_user(&joe).await;

    let response = app.login(&joe.username, "not-the-password", None).await;
    response.assert_ok();
    assert!(response.cookie("session").is_none());
    assert!(!app.has_session());
    assert!(response.html().element_by_id("login-error").is_some());
    assert_eq!(response.context_value("username"), "joe");

    app.destroy().await;
}

#[tokio::test]
async fn test_login_with_unknown_user_matches_wrong_password() {
    let mut app = TestApp::new().await;

    let response = app.login("newman", "hello", None).await;
    response.assert_ok();
    assert!(response.cookie("session").is_none());
    assert!(response.html().element_by_id("login-error").is_some());

    app.destroy().await;
}

#[tokio::test]
async fn test_login_ignores_offsite_next() {
    let mut app = TestApp::new().await;
    let user = UserFactory::build();
    app.create_user(&user).await;

    let response = app
        .login(&user.username, &user.password, Some("//evil.example.com/"))
        .await;
    response.assert_found();
    assert_eq!(response.location(), Some(app.url("").as_str()));

    app.destroy().await;
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mut app = TestApp::new().await;
    let user = app.create_user(&TestUser::joe()).await;
    app.force_login(&user);

    let logout_url = app.logout_url().to_string();
    let response = app.get(&logout_url).await;
    response.assert_found();
    assert_eq!(response.location(), Some(app.login_url()));
    assert_eq!(response.cookie("session").as_deref(), Some(""));

    app.clear_session();
    app.get(&app.url("")).await.assert_found();

    app.destroy().await;
}

#[tokio::test]
async fn test_signed_in_user_skips_login_page() {
    let mut app = TestApp::new().await;
    let user = app.create_user(&TestUser::joe()).await;
    app.force_login(&user);

    let response = app
        .get(&format!("{}?next=%2Fapps%2Fmy-first-app%2Fmap%2F", app.login_url()))
        .await;
    response.assert_found();
    assert_eq!(response.location(), Some("/apps/my-first-app/map/"));

    app.destroy().await;
}

#[tokio::test]
async fn test_login_is_rate_limited() {
    let mut app = TestApp::new().await;

    let mut last = StatusCode::OK;
    for _ in 0..20 {
        last = app.login("nobody", "nothing", None).await.status;
        if last == StatusCode::TOO_MANY_REQUESTS {
            break;
        }
    }
    assert_eq!(last, StatusCode::TOO_MANY_REQUESTS);

    app.destroy().await;
}
