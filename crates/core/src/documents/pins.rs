//! Map pins (`pin.json`), GeoJSON-shaped and read-only

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Document, DocumentKind};

/// A feature collection of pins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinCollection {
    /// Pins
    #[serde(default)]
    pub features: Vec<Pin>,
    /// Unknown fields (`type`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document for PinCollection {
    const KIND: DocumentKind = DocumentKind::Pins;
}

/// One point of interest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Where it is
    pub geometry: PinGeometry,
    /// What it is
    #[serde(default)]
    pub properties: PinProperties,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pin {
    /// Longitude
    pub fn lon(&self) -> f64 {
        self.geometry.coordinates[0]
    }

    /// Latitude
    pub fn lat(&self) -> f64 {
        self.geometry.coordinates[1]
    }
}

/// Point geometry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinGeometry {
    /// `[lon, lat]`
    pub coordinates: [f64; 2],
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pin properties
///
/// Food pins use `food`/`place` where other pins use `title`/`description`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PinProperties {
    /// Heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Dish name, used when there is no title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
    /// Body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Venue, used when there is no description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PinProperties {
    /// `title`, else `food`, else empty
    pub fn display_title(&self) -> &str {
        first_non_empty(&self.title, &self.food)
    }

    /// `description`, else `place`, else empty
    pub fn display_description(&self) -> &str {
        first_non_empty(&self.description, &self.place)
    }
}

fn first_non_empty<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> &'a str {
    primary
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or("")
}
