//! Itinerary document (`trip.json`)
//!
//! ```json
//! { "trip": { "days": [ { "meta": {...}, "stops": [ {...} ] } ] } }
//! ```
//!
//! A stop's `id` is unique within its day and never changes; edits only
//! touch the other fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use crate::types::{Document, DocumentKind};

/// Root of the itinerary document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripDocument {
    /// The trip itself
    #[serde(default)]
    pub trip: Trip,
    /// Unknown top-level fields, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document for TripDocument {
    const KIND: DocumentKind = DocumentKind::Trip;
}

impl TripDocument {
    /// Build a document from days
    pub fn from_days(days: Vec<Day>) -> Self {
        Self {
            trip: Trip {
                days,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Day at `index`, if any
    pub fn day(&self, index: usize) -> Option<&Day> {
        self.trip.days.get(index)
    }

    /// Mutable day at `index`, if any
    pub fn day_mut(&mut self, index: usize) -> Option<&mut Day> {
        self.trip.days.get_mut(index)
    }

    /// Stop `stop_id` within day `day_index`
    pub fn stop(&self, day_index: usize, stop_id: &str) -> Option<&Stop> {
        self.day(day_index).and_then(|day| day.stop(stop_id))
    }

    /// Mutable stop `stop_id` within day `day_index`
    pub fn stop_mut(&mut self, day_index: usize, stop_id: &str) -> Option<&mut Stop> {
        self.day_mut(day_index).and_then(|day| day.stop_mut(stop_id))
    }
}

/// The trip: an ordered list of days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Days in travel order
    #[serde(default, deserialize_with = "null_as_default")]
    pub days: Vec<Day>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One day of the itinerary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Where and when
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: DayMeta,
    /// Stops in planned order
    #[serde(default, deserialize_with = "null_as_default")]
    pub stops: Vec<Stop>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Day {
    /// Stop with the given id
    pub fn stop(&self, stop_id: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == stop_id)
    }

    /// Mutable stop with the given id
    pub fn stop_mut(&mut self, stop_id: &str) -> Option<&mut Stop> {
        self.stops.iter_mut().find(|s| s.id == stop_id)
    }
}

/// Day metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeta {
    /// Country visited
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    /// City, when the day is spent in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Calendar date as written by the planner
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Where the night is spent
    #[serde(default, deserialize_with = "null_as_default")]
    pub hotel: Hotel,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hotel for the night
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Hotel name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Neighbourhood
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: String,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A planned stop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Identifier, unique within the day
    pub id: String,
    /// Planned time, `HH:MM`
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    /// What happens here
    #[serde(default, deserialize_with = "null_as_default")]
    pub activity: String,
    /// Kind of stop
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Category,
    /// Where it is
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Estimated cost in SGD
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_cost_sgd: f64,
    /// Whether the stop has been done
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Free-form notes
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    /// How to get here
    #[serde(default, deserialize_with = "null_as_default")]
    pub movement: Movement,
    /// Unknown fields (including a legacy stop-level `maps` link)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stop {
    /// Whether the stop carries a non-blank note
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }

    /// Maps link for the stop, from `movement.maps` or a legacy `maps` field
    pub fn maps_link(&self) -> Option<&str> {
        self.movement
            .maps
            .as_deref()
            .or_else(|| self.extra.get("maps").and_then(Value::as_str))
            .filter(|link| !link.trim().is_empty())
    }
}

/// Stop category
///
/// A name outside the known set is kept as [`Category::Custom`] and written
/// back as read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Eating
    Food,
    /// Getting somewhere
    Transit,
    /// Seeing something
    Sightseeing,
    /// Resting
    Rest,
    /// Shopping
    Shopping,
    /// Anything else
    #[default]
    Other,
    /// A category this build does not know
    Custom(String),
}

impl Category {
    /// Stored name
    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Transit => "transit",
            Category::Sightseeing => "sightseeing",
            Category::Rest => "rest",
            Category::Shopping => "shopping",
            Category::Other => "other",
            Category::Custom(name) => name,
        }
    }

    /// Whether the name is one of the known categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "food" => Category::Food,
            "transit" => Category::Transit,
            "sightseeing" => Category::Sightseeing,
            "rest" => Category::Rest,
            "shopping" => Category::Shopping,
            "other" => Category::Other,
            _ => Category::Custom(name),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// How to reach a stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// `none`, or `+`-joined tokens from `mrt`, `bus`, `car`, `walk`
    #[serde(
        default = "Movement::default_mode",
        deserialize_with = "Movement::mode_or_none"
    )]
    pub mode: String,
    /// Directions
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    /// Maps URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            mode: Self::default_mode(),
            desc: String::new(),
            maps: None,
            extra: Map::new(),
        }
    }
}

impl Movement {
    fn default_mode() -> String {
        "none".to_string()
    }

    fn mode_or_none<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(Self::default_mode))
    }

    /// Parsed transport modes, empty for `none`
    ///
    /// Tokens are split on `+`. `none` contributes nothing; a token that
    /// is not a known mode is shown as walking.
    pub fn transport_modes(&self) -> Vec<TransportMode> {
        self.mode
            .split('+')
            .filter(|token| *token != "none")
            .map(TransportMode::from_token)
            .collect()
    }
}

/// A way of getting around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    /// Metro
    Mrt,
    /// Bus
    Bus,
    /// Car or taxi
    Car,
    /// On foot
    Walk,
}

impl TransportMode {
    /// Parse a movement token; unknown tokens are walking
    pub fn from_token(token: &str) -> Self {
        match token {
            "mrt" => TransportMode::Mrt,
            "bus" => TransportMode::Bus,
            "car" => TransportMode::Car,
            _ => TransportMode::Walk,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Mrt => "MRT",
            TransportMode::Bus => "Bus",
            TransportMode::Car => "Car",
            TransportMode::Walk => "Walk",
        }
    }
}
