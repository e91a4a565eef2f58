//! Stream gage map pages

use axum::{
    extract::{Path, State},
    http::HeaderMap,
};
use serde_json::json;
use tracing::debug;

use crate::{
    gizmos::{MapView, MapViewOptions, MvLayer},
    models::{centroid, GageLink, StreamGage},
    services::GageService,
    templates::{self, Page},
    utils::error::PageResult,
    AppState,
};

use super::current_user;

/// Legend title of the gage layer
const LAYER_TITLE: &str = "Stream Gages";

/// Options of the all-gages view: every gage, centred on their centroid
fn overview_options(state: &AppState, gages: &[StreamGage]) -> MapViewOptions {
    let settings = &state.config.app.map;
    let center = centroid(gages).unwrap_or([0.0, 0.0]);
    MapViewOptions::new(settings, MapView::new(center, settings.overview_zoom))
        .with_layer(MvLayer::gages(LAYER_TITLE, gages))
}

/// Options of the single-gage view, zoomed in on the selected gage
fn detail_options(state: &AppState, gage: &StreamGage) -> MapViewOptions {
    let settings = &state.config.app.map;
    let view = MapView::new([gage.longitude, gage.latitude], settings.detail_zoom);
    MapViewOptions::new(settings, view)
        .with_layer(MvLayer::gages(gage.display_name(), std::slice::from_ref(gage)))
}

fn render_map(
    state: &AppState,
    headers: &HeaderMap,
    gages: &[StreamGage],
    selected: Option<i64>,
    map_options: MapViewOptions,
) -> Page {
    let app = &state.config.app;
    let links = GageLink::build(gages, selected, &app.page("map/"));
    let user = current_user(headers, state);
    let html = templates::map::render(
        app,
        user.as_ref().map(|u| u.username.as_str()),
        &links,
        &map_options,
    );

    let context = json!({
        "map_options": map_options,
        "gages": links,
        "gage_id": selected,
    });
    Page::new(context, html)
}

/// GET {root}/map/
pub async fn all_gages(State(state): State<AppState>, headers: HeaderMap) -> PageResult<Page> {
    let gages = GageService::new(state.db.clone()).list().await?;
    debug!(count = gages.len(), "Rendering all gages map");

    let options = overview_options(&state, &gages);
    Ok(render_map(&state, &headers, &gages, None, options))
}

/// GET {root}/map/{id}/
///
/// Unknown ids render the 404 page.
pub async fn single_gage(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> PageResult<Page> {
    let service = GageService::new(state.db.clone());
    let gage = service.get(id).await?;
    let gages = service.list().await?;
    debug!(gage_id = id, "Rendering single gage map");

    let options = detail_options(&state, &gage);
    Ok(render_map(&state, &headers, &gages, Some(gage.id), options))
}
