//! Main entry point for TripDeck.
//!
//! This module provides the `TripDeck` struct: one bucket of documents and
//! a [`Session`] per document kind.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tripdeck_core::error::Result;
use tripdeck_core::{Document, NoteDocument, PinCollection, TodoDocument, TripDocument};
use tripdeck_engine::Session;
use tripdeck_storage::{seed_defaults, DirStore, DocumentStore, MemoryStore};

/// Shared handle to the bucket behind every session
pub type SharedStore = Arc<dyn DocumentStore>;

/// A trip planner bound to one document bucket.
///
/// # Example
///
/// ```ignore
/// use tripdeck::prelude::*;
///
/// let deck = TripDeck::open("./bucket")?;
/// let mut todos = deck.todos()?;
/// todos.apply(|doc| ops::add_todo(doc, "Buy adapter", None, Priority::High, &SystemClock))?;
/// ```
pub struct TripDeck {
    store: SharedStore,
    path: Option<PathBuf>,
}

impl TripDeck {
    /// Open a bucket directory, seeding any missing documents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create a planner with no disk I/O.
    ///
    /// | Method | Disk Files | Survives Restart |
    /// |--------|------------|------------------|
    /// | `TripDeck::ephemeral()` | None | No |
    /// | `TripDeck::open(path)` | User dir | Yes |
    pub fn ephemeral() -> Result<Self> {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Use an existing store, seeding any missing documents.
    pub fn with_store(store: SharedStore) -> Result<Self> {
        seed_defaults(store.as_ref())?;
        Ok(Self { store, path: None })
    }

    /// Create a builder for bucket configuration.
    pub fn builder() -> TripDeckBuilder {
        TripDeckBuilder::new()
    }

    /// Itinerary session
    pub fn trip(&self) -> Result<Session<TripDocument, SharedStore>> {
        self.session()
    }

    /// Todo list session
    pub fn todos(&self) -> Result<Session<TodoDocument, SharedStore>> {
        self.session()
    }

    /// General note session
    pub fn note(&self) -> Result<Session<NoteDocument, SharedStore>> {
        self.session()
    }

    /// Map pins, read-only
    pub fn pins(&self) -> Result<PinCollection> {
        PinCollection::from_slice(&self.store.get(PinCollection::KIND.key())?)
    }

    /// Load any document kind into a fresh session.
    pub fn session<D: Document>(&self) -> Result<Session<D, SharedStore>> {
        Session::load(Arc::clone(&self.store))
    }

    /// The underlying store
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Bucket directory, `None` for ephemeral or caller-supplied stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check if nothing is written to disk.
    pub fn is_ephemeral(&self) -> bool {
        self.path.is_none()
    }
}

/// Builder for bucket configuration.
///
/// ```ignore
/// let deck = TripDeck::builder()
///     .path("./bucket")
///     .strict()
///     .open()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripDeckBuilder {
    path: Option<PathBuf>,
    strict: bool,
}

impl TripDeckBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bucket directory.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// fsync every document before it replaces the previous one.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Open the bucket, or an in-memory store when no path was set.
    pub fn open(self) -> Result<TripDeck> {
        let Some(path) = self.path else {
            return TripDeck::ephemeral();
        };
        let mut store = DirStore::open(&path)?;
        if self.strict {
            store = store.strict();
        }
        let mut deck = TripDeck::with_store(Arc::new(store))?;
        deck.path = Some(path);
        Ok(deck)
    }
}
