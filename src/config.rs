//! Map view settings. Every field has a default so the dataset file only
//! needs to carry the keys it wants to override.

use serde::{Deserialize, Serialize};

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Initial `[lat, lon]` used until markers are fitted (and kept for an empty dataset).
    pub center: [f64; 2],
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: u8,
    /// Pixel padding passed to `fitBounds`.
    pub fit_padding: [f64; 2],
    /// Marker icon edge length in pixels.
    pub marker_size: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [25.0, 110.0],
            zoom: 4.0,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: 18,
            fit_padding: [50.0, 50.0],
            marker_size: 16.0,
        }
    }
}

/// `L.tileLayer` options.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
    pub max_zoom: u8,
}

/// `L.divIcon` options.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions {
    pub class_name: &'static str,
    pub icon_size: [f64; 2],
    pub icon_anchor: [f64; 2],
    pub popup_anchor: [f64; 2],
}

/// `fitBounds` options.
#[derive(Serialize)]
pub struct FitBoundsOptions {
    pub padding: [f64; 2],
}

impl MapConfig {
    pub fn tile_layer_options(&self) -> TileLayerOptions<'_> {
        TileLayerOptions {
            attribution: &self.attribution,
            max_zoom: self.max_zoom,
        }
    }

    pub fn marker_icon_options(&self) -> DivIconOptions {
        let half = self.marker_size / 2.0;
        DivIconOptions {
            class_name: "custom-marker",
            icon_size: [self.marker_size, self.marker_size],
            icon_anchor: [half, half],
            popup_anchor: [0.0, -(half + 2.0)],
        }
    }

    pub fn fit_bounds_options(&self) -> FitBoundsOptions {
        FitBoundsOptions {
            padding: self.fit_padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg: MapConfig = serde_json::from_str(r#"{ "zoom": 6, "fitPadding": [20, 30] }"#).unwrap();
        assert_eq!(cfg.zoom, 6.0);
        assert_eq!(cfg.fit_padding, [20.0, 30.0]);
        assert_eq!(cfg.center, [25.0, 110.0]);
        assert_eq!(cfg.max_zoom, 18);
    }

    #[test]
    fn marker_icon_matches_default_geometry() {
        let json = serde_json::to_value(MapConfig::default().marker_icon_options()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "className": "custom-marker",
                "iconSize": [16.0, 16.0],
                "iconAnchor": [8.0, 8.0],
                "popupAnchor": [0.0, -10.0],
            })
        );
    }

    #[test]
    fn tile_layer_options_serialize_camel_case() {
        let cfg = MapConfig::default();
        let json = serde_json::to_value(cfg.tile_layer_options()).unwrap();
        assert_eq!(json["maxZoom"], 18);
        assert!(json["attribution"].as_str().unwrap().contains("OpenStreetMap"));
    }
}
