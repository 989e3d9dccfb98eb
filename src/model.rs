//! Core data models for the travel map.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelLocation {
    pub name: String,
    pub country: String,
    /// Free-form, shown as-is (e.g. "2023-04").
    pub visit_date: String,
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    /// Link to the write-up for this trip.
    pub post_url: String,
    #[serde(default)]
    pub images: Vec<LocationImage>,
}

impl TravelLocation {
    pub fn has_gallery_nav(&self) -> bool {
        self.images.len() > 1
    }
}

/// Counters shown in the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapSummary {
    pub location_count: usize,
    /// Distinct `country` values, compared as exact strings.
    pub country_count: usize,
}

impl MapSummary {
    pub fn from_locations(locations: &[TravelLocation]) -> Self {
        let countries: HashSet<&str> = locations.iter().map(|l| l.country.as_str()).collect();
        Self {
            location_count: locations.len(),
            country_count: countries.len(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing every location; `None` when there are none.
    pub fn enclosing(locations: &[TravelLocation]) -> Option<Self> {
        let first = locations.first()?;
        let init = GeoBounds {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };
        Some(locations.iter().skip(1).fold(init, |b, l| GeoBounds {
            south: b.south.min(l.lat),
            west: b.west.min(l.lon),
            north: b.north.max(l.lat),
            east: b.east.max(l.lon),
        }))
    }

    /// `[[south, west], [north, east]]`, the corner pair `L.latLngBounds` takes.
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

#[cfg(test)]
pub(crate) fn location(name: &str, country: &str, lat: f64, lon: f64, images: &[&str]) -> TravelLocation {
    TravelLocation {
        name: name.into(),
        country: country.into(),
        visit_date: "2024-01".into(),
        description: format!("{} description", name),
        lat,
        lon,
        post_url: format!("/posts/{}/", name.to_lowercase()),
        images: images
            .iter()
            .map(|u| LocationImage {
                url: (*u).into(),
                caption: None,
            })
            .collect(),
    }
}
