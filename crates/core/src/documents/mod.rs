//! Document model for TripDeck
//!
//! This module defines the typed shape of every stored document. Each type
//! keeps the fields it does not know about in a flattened `extra` map, so a
//! load → mutate → persist cycle writes back everything it read.
//!
//! - [`trip`]: the itinerary, days of stops
//! - [`todo`]: the todo list
//! - [`note`]: the general note
//! - [`pins`]: read-only map pins

pub mod note;
pub mod pins;
pub mod todo;
pub mod trip;

use serde::{Deserialize, Deserializer};

pub use note::NoteDocument;
pub use pins::{Pin, PinCollection, PinGeometry, PinProperties};
pub use todo::{Priority, TodoDocument, TodoItem};
pub use trip::{Category, Day, DayMeta, Hotel, Movement, Stop, TransportMode, Trip, TripDocument};

/// Read a field that may be `null`, treating `null` like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
