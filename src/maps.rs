//! Map catalog
//!
//! Built-in maps plus JSON loading for external ones. Decorations and
//! backgrounds are opaque strings for the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{GAME_HEIGHT, SPAWN_FLOOR_MARGIN};
use crate::sim::state::{Axis, Platform};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("map '{0}' has no platforms")]
    NoPlatforms(String),
}

/// Presentation hints for plain platforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStyle {
    pub class_name: String,
    #[serde(default)]
    pub stroke_width: Option<String>,
    #[serde(default)]
    pub rx: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapData {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub background: String,
    /// Platform templates, in collision order
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub platform_style: Option<PlatformStyle>,
}

impl MapData {
    /// Parse a single map from JSON
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let map: MapData = serde_json::from_str(json)?;
        if map.platforms.is_empty() {
            return Err(MapError::NoPlatforms(map.id));
        }
        Ok(map)
    }

    /// Platforms high enough above the floor line to spawn on
    pub fn spawn_platforms(&self) -> Vec<&Platform> {
        self.platforms
            .iter()
            .filter(|p| p.y < GAME_HEIGHT - SPAWN_FLOOR_MARGIN)
            .collect()
    }
}

/// Ordered set of maps; the first one is the default
#[derive(Debug, Clone)]
pub struct MapCatalog {
    maps: Vec<MapData>,
}

impl MapCatalog {
    /// Catalog from an explicit list. Falls back to the built-ins if empty.
    pub fn new(maps: Vec<MapData>) -> Self {
        if maps.is_empty() {
            log::warn!("Empty map catalog, using built-in maps");
            return Self::builtin();
        }
        Self { maps }
    }

    /// Green Meadows, Winter Wonderland and Desert Dunes
    pub fn builtin() -> Self {
        Self {
            maps: vec![nature(), snow(), sand()],
        }
    }

    /// Look up a map, falling back to the default map for unknown ids
    pub fn get(&self, id: &str) -> &MapData {
        match self.maps.iter().find(|m| m.id == id) {
            Some(map) => map,
            None => {
                log::warn!("Unknown map '{}', using '{}'", id, self.maps[0].id);
                &self.maps[0]
            }
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.maps.iter().map(|m| m.id.as_str())
    }

    pub fn maps(&self) -> &[MapData] {
        &self.maps
    }
}

impl Default for MapCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn style(class_name: &str, rx: Option<&str>) -> Option<PlatformStyle> {
    Some(PlatformStyle {
        class_name: class_name.to_string(),
        stroke_width: Some("4".to_string()),
        rx: rx.map(str::to_string),
    })
}

fn nature() -> MapData {
    MapData {
        id: "nature".into(),
        name: "Green Meadows".into(),
        background: "linear-gradient(to bottom, #87CEEB, #6dd5ed)".into(),
        platforms: vec![
            Platform::new(0.0, 850.0, 1600.0, 50.0),
            Platform::new(200.0, 700.0, 250.0, 30.0),
            Platform::new(550.0, 600.0, 200.0, 30.0),
            Platform::new(850.0, 700.0, 150.0, 30.0),
            Platform::new(1200.0, 650.0, 300.0, 30.0),
            Platform::new(100.0, 500.0, 150.0, 30.0),
            Platform::new(400.0, 400.0, 200.0, 30.0),
            Platform::new(750.0, 450.0, 250.0, 30.0),
            Platform::new(1100.0, 350.0, 200.0, 30.0),
            Platform::new(0.0, 250.0, 250.0, 30.0),
            Platform::new(1350.0, 200.0, 250.0, 30.0),
            Platform::new(700.0, 150.0, 200.0, 30.0),
            // Mushrooms
            Platform::new(580.0, 830.0, 60.0, 20.0).mushroom(),
            Platform::new(1050.0, 830.0, 60.0, 20.0).mushroom(),
            Platform::new(780.0, 430.0, 60.0, 20.0).mushroom(),
        ],
        platform_style: style("fill-lime-600 stroke-lime-800", None),
    }
}

fn snow() -> MapData {
    MapData {
        id: "snow".into(),
        name: "Winter Wonderland".into(),
        background: "linear-gradient(to bottom, #a1c4fd, #c2e9fb)".into(),
        platforms: vec![
            Platform::new(0.0, 850.0, 400.0, 50.0),
            Platform::new(1200.0, 850.0, 400.0, 50.0),
            Platform::new(100.0, 750.0, 200.0, 30.0),
            Platform::new(400.0, 650.0, 150.0, 30.0).moving(Axis::Vertical, 100.0, 2.0, 0.0),
            Platform::new(650.0, 550.0, 300.0, 30.0),
            Platform::new(1100.0, 700.0, 250.0, 30.0),
            Platform::new(1400.0, 600.0, 150.0, 30.0),
            Platform::new(50.0, 450.0, 100.0, 30.0),
            Platform::new(300.0, 350.0, 200.0, 30.0),
            Platform::new(800.0, 400.0, 250.0, 30.0).moving(Axis::Horizontal, 200.0, 2.5, 100.0),
            Platform::new(1200.0, 300.0, 300.0, 30.0),
            Platform::new(700.0, 200.0, 200.0, 30.0).moving(Axis::Vertical, 50.0, 1.5, 50.0),
        ],
        platform_style: style("fill-slate-100 stroke-slate-400", Some("5")),
    }
}

fn sand() -> MapData {
    MapData {
        id: "sand".into(),
        name: "Desert Dunes".into(),
        background: "linear-gradient(to bottom, #fde4a8, #f8c26c)".into(),
        platforms: vec![
            Platform::new(0.0, 850.0, 1600.0, 50.0),
            Platform::new(50.0, 750.0, 300.0, 30.0),
            Platform::new(450.0, 650.0, 200.0, 30.0).moving(Axis::Horizontal, 150.0, 2.0, 0.0),
            Platform::new(750.0, 700.0, 150.0, 30.0),
            Platform::new(1000.0, 600.0, 250.0, 30.0),
            Platform::new(1350.0, 750.0, 200.0, 30.0),
            Platform::new(200.0, 500.0, 150.0, 30.0),
            Platform::new(550.0, 400.0, 300.0, 30.0).moving(Axis::Vertical, 100.0, 2.5, 200.0),
            Platform::new(950.0, 450.0, 200.0, 30.0),
            Platform::new(1250.0, 350.0, 150.0, 30.0),
            Platform::new(0.0, 250.0, 200.0, 30.0).moving(Axis::Horizontal, 100.0, 1.5, 50.0),
            Platform::new(1400.0, 200.0, 200.0, 30.0),
        ],
        platform_style: style("fill-amber-400 stroke-amber-600", None),
    }
}
