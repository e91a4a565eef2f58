//! Stream gage model

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Label of the navigation entry that shows every gage
pub const ALL_GAGES_LABEL: &str = "All Gages";

/// Gages written to an empty store: (latitude, longitude, value)
pub const DEFAULT_GAGES: [(f64, f64, i64); 4] = [
    (40.214969, -111.714013, 1),
    (40.236816, -111.699047, 2),
    (40.264000, -111.684306, 3),
    (40.269440, -111.663872, 4),
];

/// A stream gage monitoring station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamGage {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub value: i64,
}

impl StreamGage {
    /// Name shown in the navigation list, e.g. `Gage 3`
    pub fn display_name(&self) -> String {
        format!("Gage {}", self.id)
    }

    /// GeoJSON point feature for this gage
    pub fn to_feature(&self) -> Value {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [self.longitude, self.latitude]
            },
            "properties": {
                "id": self.id,
                "name": self.display_name(),
                "value": self.value
            }
        })
    }
}

/// GeoJSON feature collection of the given gages
pub fn feature_collection(gages: &[StreamGage]) -> Value {
    json!({
        "type": "FeatureCollection",
        "crs": {
            "type": "name",
            "properties": { "name": "EPSG:4326" }
        },
        "features": gages.iter().map(StreamGage::to_feature).collect::<Vec<_>>()
    })
}

/// Mean position of the gages as `[longitude, latitude]`
pub fn centroid(gages: &[StreamGage]) -> Option<[f64; 2]> {
    if gages.is_empty() {
        return None;
    }
    let n = gages.len() as f64;
    let lon = gages.iter().map(|g| g.longitude).sum::<f64>() / n;
    let lat = gages.iter().map(|g| g.latitude).sum::<f64>() / n;
    Some([lon, lat])
}

/// DOM id of a navigation link: `link-` followed by the label without whitespace
///
/// `"All Gages"` becomes `link-AllGages`, `"Gage 2"` becomes `link-Gage2`.
pub fn nav_link_id(label: &str) -> String {
    let compact: String = label.chars().filter(|c| !c.is_whitespace()).collect();
    format!("link-{}", compact)
}

/// Entry in the map page's gage navigation list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GageLink {
    /// `None` for the all-gages entry
    pub gage_id: Option<i64>,
    pub label: String,
    pub html_id: String,
    pub href: String,
    pub active: bool,
}

impl GageLink {
    /// Build the navigation list with the all-gages entry first
    ///
    /// `selected` marks one gage as active; `None` marks the all-gages entry.
    pub fn build(gages: &[StreamGage], selected: Option<i64>, map_url: &str) -> Vec<GageLink> {
        let base = map_url.trim_end_matches('/');
        let mut links = Vec::with_capacity(gages.len() + 1);
        links.push(GageLink {
            gage_id: None,
            label: ALL_GAGES_LABEL.to_string(),
            html_id: nav_link_id(ALL_GAGES_LABEL),
            href: format!("{}/", base),
            active: selected.is_none(),
        });
        for gage in gages {
            let label = gage.display_name();
            links.push(GageLink {
                gage_id: Some(gage.id),
                html_id: nav_link_id(&label),
                label,
                href: format!("{}/{}/", base, gage.id),
                active: selected == Some(gage.id),
            });
        }
        links
    }
}
