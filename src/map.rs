//! Map Utilities
//!
//! Marker data and link helpers for the map display.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Base URL used to build "open in map" links from a place name
const MAP_SEARCH_URL: &str = "https://map.naver.com/p/search/";

/// A point of interest on the map image
#[derive(Debug, Clone, PartialEq)]
pub struct MapLocation {
    pub id: String,
    pub name: String,
    /// Horizontal position in percent of the image width
    pub x: f64,
    /// Vertical position in percent of the image height
    pub y: f64,
    pub link: Option<String>,
}

impl MapLocation {
    pub fn new(id: &str, name: &str, x: f64, y: f64) -> Self {
        Self { id: id.to_string(), name: name.to_string(), x, y, link: None }
    }

    /// Use a map search for the location name as its link
    pub fn with_search_link(mut self) -> Self {
        self.link = Some(search_url(&self.name));
        self
    }

    /// CSS `left`/`top` for the marker, clamped to the image
    pub fn position_style(&self) -> String {
        format!("left: {}%; top: {}%;", clamp_percent(self.x), clamp_percent(self.y))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapConfig {
    pub image_url: String,
    /// Markers per group ID
    pub locations: HashMap<String, Vec<MapLocation>>,
}

impl MapConfig {
    /// Markers for a group; empty for unknown groups
    pub fn locations_for(&self, group_id: &str) -> Vec<MapLocation> {
        self.locations.get(group_id).cloned().unwrap_or_default()
    }
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

pub fn search_url(name: &str) -> String {
    format!("{}{}", MAP_SEARCH_URL, utf8_percent_encode(name.trim(), NON_ALPHANUMERIC))
}
