//! Map view gizmo
//!
//! Options are serialised into the template context as-is and embedded in the
//! rendered widget as a JSON island. The bootstrap script in `map_view.js`
//! reads that island and draws the basemap and data layers with OpenLayers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{config::MapSettings, models::feature_collection, models::StreamGage};
use crate::templates::html_escape;

/// DOM id of the rendered map widget
pub const MAP_ELEMENT_ID: &str = "gizmo-map";

pub const OPENLAYERS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/ol@v9.2.4/dist/ol.js";
pub const OPENLAYERS_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/ol@v9.2.4/ol.css";

/// Draws each `.gizmo-map-view` from its options island
const BOOTSTRAP_SCRIPT: &str = include_str!("map_view.js");

/// Initial view of the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub projection: String,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub minzoom: f64,
    pub maxzoom: f64,
}

impl MapView {
    pub fn new(center: [f64; 2], zoom: f64) -> Self {
        Self {
            projection: "EPSG:4326".to_string(),
            center,
            zoom,
            minzoom: 2.0,
            maxzoom: 18.0,
        }
    }
}

/// A data layer shown on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MvLayer {
    /// Layer source type, always `GeoJSON` here
    pub source: String,
    pub legend_title: String,
    pub options: Value,
    pub feature_selection: bool,
}

impl MvLayer {
    /// GeoJSON layer with the given gages
    pub fn gages(legend_title: impl Into<String>, gages: &[StreamGage]) -> Self {
        Self {
            source: "GeoJSON".to_string(),
            legend_title: legend_title.into(),
            options: feature_collection(gages),
            feature_selection: true,
        }
    }

    fn feature_count(&self) -> usize {
        self.options["features"]
            .as_array()
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// Options of the map view widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewOptions {
    pub height: String,
    pub width: String,
    pub basemap: String,
    pub view: MapView,
    pub legend: bool,
    pub layers: Vec<MvLayer>,
}

impl MapViewOptions {
    /// Options with the configured size and basemap, without layers
    pub fn new(settings: &MapSettings, view: MapView) -> Self {
        Self {
            height: settings.height.clone(),
            width: settings.width.clone(),
            basemap: settings.basemap.clone(),
            view,
            legend: true,
            layers: Vec::new(),
        }
    }

    pub fn with_layer(mut self, layer: MvLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// JSON of the options, safe to place inside a `<script>` element
    fn script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026")
    }

    fn legend_html(&self) -> String {
        let items: String = self
            .layers
            .iter()
            .map(|layer| {
                format!(
                    r#"<li class="legend-item">{} ({})</li>"#,
                    html_escape(&layer.legend_title),
                    layer.feature_count()
                )
            })
            .collect();
        format!(r#"<ul class="map-legend">{}</ul>"#, items)
    }

    /// Render the widget
    pub fn render(&self) -> String {
        let legend = if self.legend {
            self.legend_html()
        } else {
            String::new()
        };

        format!(
            r#"<div id="{id}" class="gizmo-map-view" style="height: {height}; width: {width};" data-basemap="{basemap}">
    <div class="map-canvas" style="height: 100%; width: 100%;" data-center="{lon},{lat}" data-zoom="{zoom}"></div>
    <div class="map-popup" hidden></div>
    {legend}
    <script type="application/json" class="map-options">{json}</script>
</div>
<link rel="stylesheet" href="{stylesheet}">
<script src="{script}"></script>
<script class="map-bootstrap">{bootstrap}</script>"#,
            id = MAP_ELEMENT_ID,
            height = html_escape(&self.height),
            width = html_escape(&self.width),
            basemap = html_escape(&self.basemap),
            lon = self.view.center[0],
            lat = self.view.center[1],
            zoom = self.view.zoom,
            legend = legend,
            json = self.script_json(),
            stylesheet = OPENLAYERS_STYLESHEET,
            script = OPENLAYERS_SCRIPT,
            bootstrap = BOOTSTRAP_SCRIPT
        )
    }
}
