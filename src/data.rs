// Bundled travel dataset, parsed once at startup.

use crate::config::MapConfig;
use crate::error::Result;
use crate::model::TravelLocation;
use serde::Deserialize;

const BUNDLED_DATASET: &str = include_str!("../data/locations.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub locations: Vec<TravelLocation>,
}

impl Dataset {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_DATASET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TravelMapError;

    #[test]
    fn bundled_dataset_parses() {
        let ds = Dataset::bundled().unwrap();
        assert!(!ds.locations.is_empty());
        assert_eq!(ds.map, MapConfig::default());
    }

    #[test]
    fn keeps_file_order() {
        let ds = Dataset::parse(
            r#"{"locations":[
                {"name":"First","country":"A","visitDate":"1","description":"","lat":0,"lon":0,"postUrl":"/1"},
                {"name":"Second","country":"B","visitDate":"2","description":"","lat":1,"lon":1,"postUrl":"/2",
                 "images":[{"url":"a.jpg","caption":"cap"}]}
            ]}"#,
        )
        .unwrap();
        let names: Vec<_> = ds.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(ds.locations[1].images[0].caption.as_deref(), Some("cap"));
    }

    #[test]
    fn map_section_overrides_config() {
        let ds = Dataset::parse(r#"{"map":{"center":[0,0],"zoom":2},"locations":[]}"#).unwrap();
        assert_eq!(ds.map.center, [0.0, 0.0]);
        assert_eq!(ds.map.zoom, 2.0);
        assert_eq!(ds.map.max_zoom, 18);
    }

    #[test]
    fn malformed_json_is_a_dataset_error() {
        let err = Dataset::parse(r#"{"locations":[{"name":1}]}"#).unwrap_err();
        assert!(matches!(err, TravelMapError::Dataset(_)));
    }
}
