//! Read-only queries over map pins
//!
//! The map itself is an external collaborator. It receives one
//! [`Marker`] per pin and the [`Bounds`] to fit the view to.

use tripdeck_core::{Pin, PinCollection};

/// What the map needs to draw one pin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker<'a> {
    /// `[lon, lat]`
    pub coordinates: [f64; 2],
    /// Popup heading
    pub title: &'a str,
    /// Popup body
    pub description: &'a str,
}

impl<'a> From<&'a Pin> for Marker<'a> {
    fn from(pin: &'a Pin) -> Self {
        Self {
            coordinates: pin.geometry.coordinates,
            title: pin.properties.display_title(),
            description: pin.properties.display_description(),
        }
    }
}

/// Markers for every pin, in document order
pub fn markers(pins: &PinCollection) -> impl Iterator<Item = Marker<'_>> {
    pins.features.iter().map(Marker::from)
}

/// Pins whose title or description contains `query`, ignoring case
///
/// An empty query matches every pin.
pub fn search<'a>(pins: &'a PinCollection, query: &str) -> Vec<&'a Pin> {
    let needle = query.to_lowercase();
    pins.features
        .iter()
        .filter(|pin| {
            let props = &pin.properties;
            props.display_title().to_lowercase().contains(&needle)
                || props.display_description().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Bounding box of a set of pins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// South-west corner `[lon, lat]`
    pub min: [f64; 2],
    /// North-east corner `[lon, lat]`
    pub max: [f64; 2],
}

impl Bounds {
    /// Midpoint of the box
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }

    fn extend(mut self, point: [f64; 2]) -> Self {
        self.min = [self.min[0].min(point[0]), self.min[1].min(point[1])];
        self.max = [self.max[0].max(point[0]), self.max[1].max(point[1])];
        self
    }
}

/// Smallest box holding every pin, `None` when there are no pins
pub fn bounds(pins: &PinCollection) -> Option<Bounds> {
    let mut points = pins.features.iter().map(|p| p.geometry.coordinates);
    let first = points.next()?;
    Some(points.fold(
        Bounds {
            min: first,
            max: first,
        },
        Bounds::extend,
    ))
}
