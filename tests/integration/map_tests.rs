//! Map pages

use axum::http::StatusCode;
use rstest::rstest;

use crate::common::TestApp;

#[tokio::test]
async fn test_map_lists_all_gages() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("map/")).await;
    response.assert_ok();

    let map_options = response.context_value("map_options");
    assert!(!map_options.is_null());
    assert_eq!(
        map_options["layers"][0]["options"]["features"]
            .as_array()
            .unwrap()
            .len(),
        4
    );
    assert!(response.context_value("gage_id").is_null());

    let html = response.html();
    assert!(html.expect_element("link-AllGages").has_class("active"));
    for id in 1..=4 {
        assert!(!html.expect_element(&format!("link-Gage{}", id)).has_class("active"));
    }
    assert!(html.expect_element("gizmo-map").child_count() >= 1);

    app.destroy().await;
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[tokio::test]
async fn test_map_single_gage(#[case] gage_id: i64) {
    let app = TestApp::new().await;

    let response = app.get(&app.url(&format!("map/{}/", gage_id))).await;
    response.assert_ok();
    assert!(!response.context_value("map_options").is_null());
    assert_eq!(response.context_value("gage_id"), gage_id);

    let html = response.html();
    assert!(html
        .expect_element(&format!("link-Gage{}", gage_id))
        .has_class("active"));
    assert!(!html.expect_element("link-AllGages").has_class("active"));
    assert!(html.expect_element("gizmo-map").child_count() >= 1);

    app.destroy().await;
}

#[tokio::test]
async fn test_map_single_gage_centres_on_gage() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("map/3/")).await;
    let view = &response.context_value("map_options")["view"];
    assert_eq!(view["center"][0], -111.684306);
    assert_eq!(view["center"][1], 40.264);
    assert_eq!(view["zoom"], app.state.config.app.map.detail_zoom);

    app.destroy().await;
}

#[tokio::test]
async fn test_map_page_draws_widget_with_openlayers() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("map/")).await;
    response.assert_ok();
    let text = response.text();
    assert!(text.contains(r#"<script src="https://cdn.jsdelivr.net/npm/ol@v9.2.4/dist/ol.js"></script>"#));
    assert!(text.contains(r#"<script class="map-bootstrap">"#));
    assert!(text.contains("querySelectorAll(\".gizmo-map-view\")"));

    let csp = response
        .headers
        .get("content-security-policy")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(csp.contains("https://cdn.jsdelivr.net"));

    app.destroy().await;
}

#[tokio::test]
async fn test_map_unknown_gage_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("map/99/")).await;
    response.assert_not_found();
    assert!(response.text().contains("Gage 99 not found"));

    app.destroy().await;
}

#[tokio::test]
async fn test_map_non_integer_gage_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.get(&app.url("map/abc/")).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    app.destroy().await;
}
