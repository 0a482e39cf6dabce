//! Document storage for TripDeck
//!
//! This crate implements the blob store that holds whole JSON documents:
//! - [`DocumentStore`]: read/replace whole objects by key
//! - [`MemoryStore`]: FxHashMap behind a RwLock, no disk I/O
//! - [`DirStore`]: one file per key in a bucket directory, atomic replace
//!
//! Stores treat documents as opaque bytes. Decoding belongs to the engine
//! and validation of request bodies to the gateway.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dir;
pub mod memory;
pub mod store;

pub use dir::DirStore;
pub use memory::MemoryStore;
pub use store::{seed_defaults, validate_key, DocumentStore};
