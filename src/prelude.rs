//! Convenient imports for TripDeck.
//!
//! ```ignore
//! use tripdeck::prelude::*;
//!
//! let deck = TripDeck::ephemeral()?;
//! let mut note = deck.note()?;
//! note.apply(|doc| ops::set_note_text(doc, "passport\nadapter", &SystemClock))?;
//! ```

// Main entry point
pub use crate::deck::{TripDeck, TripDeckBuilder};

// Error handling
pub use tripdeck_core::{Error, Result};

// Documents
pub use tripdeck_core::{
    Category, Day, Document, DocumentKind, NoteDocument, Pin, PinCollection, Priority, Stop,
    TodoDocument, TodoItem, TripDocument,
};

// Engine
pub use tripdeck_engine::ops;
pub use tripdeck_engine::{
    accept, decline, Clock, Confirm, DayMetrics, NoteEditTracker, Outcome, Session, StopKey,
    SystemClock,
};

// Stores
pub use tripdeck_storage::{DirStore, DocumentStore, MemoryStore};

// Re-export serde_json for convenience
pub use serde_json::json;
