//! # TripDeck
//!
//! Personal trip planner: an itinerary of days and stops, a todo list, a
//! free-form note and a read-only set of map pins, each stored as one whole
//! JSON document.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tripdeck::prelude::*;
//!
//! let deck = TripDeck::open("./bucket")?;
//!
//! // One session per page visit: load once, apply intents, persist on commit
//! let mut trip = deck.trip()?;
//! trip.apply(|doc| ops::toggle_stop_completion(doc, 0, "s1"))?;
//! trip.apply(|doc| ops::edit_stop_cost(doc, 0, "s1", "12.50"))?;
//! ```
//!
//! ## Crates
//!
//! - [`tripdeck_core`] - document model, kinds and keys, errors
//! - [`tripdeck_storage`] - the `DocumentStore` trait with memory and directory stores
//! - [`tripdeck_engine`] - pure operations, sessions, drafts and derived metrics

#![warn(missing_docs)]

mod deck;

pub mod prelude;

pub use deck::{SharedStore, TripDeck, TripDeckBuilder};
pub use tripdeck_core::{Error, Result};

pub use tripdeck_core;
pub use tripdeck_engine;
pub use tripdeck_storage;
