//! Core types for TripDeck
//!
//! This crate defines the shared vocabulary of the system:
//! - [`documents`]: the typed model of every stored JSON document
//! - [`types`]: document kinds, storage keys and the [`Document`] trait
//! - [`error`]: the canonical error type
//! - [`time`]: timestamp helpers shared by the engine and the gateway
//!
//! ## Design Principle
//!
//! - **tripdeck-core** defines the canonical document model (this crate)
//! - **tripdeck-storage** stores documents as opaque JSON bytes
//! - **tripdeck-engine** applies user intents to documents
//!
//! All crates share the same type definitions from core.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod documents;
pub mod error;
pub mod time;
pub mod types;

pub use documents::{
    Category, Day, DayMeta, Hotel, Movement, NoteDocument, Pin, PinCollection, PinGeometry,
    PinProperties, Priority, Stop, TodoDocument, TodoItem, TransportMode, Trip, TripDocument,
};
pub use error::{Error, Result};
pub use types::{Document, DocumentKind};
