//! The `DocumentStore` trait
//!
//! A store maps a fixed key per document type to the bytes of one whole
//! JSON document. `get` returns the full object, `put` replaces it. There
//! are no partial updates, no versions, and no locking across calls: two
//! writers to the same key clobber each other and the last write wins.

use std::sync::Arc;

use tracing::info;
use tripdeck_core::error::{Error, Result};
use tripdeck_core::DocumentKind;

/// Key/value blob storage for whole documents
///
/// # Thread Safety
///
/// Implementations are `Send + Sync`; the gateway shares one store across
/// request handlers.
pub trait DocumentStore: Send + Sync {
    /// Read the whole object stored under `key`
    ///
    /// Returns `Error::NotFound` if nothing is stored there.
    fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Replace the whole object stored under `key`
    ///
    /// Readers observe either the previous bytes or the new bytes, never a
    /// mix of both.
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Check whether an object is stored under `key`
    fn contains(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Vec<u8>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).put(key, bytes)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key)
    }
}

/// Validate a storage key
///
/// Keys name a single object in a flat bucket: non-empty, no path
/// separators, no parent references.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey("key is empty".into()));
    }
    if key.contains('/') || key.contains('\\') {
        return Err(Error::InvalidKey(format!("'{}' contains a path separator", key)));
    }
    if key == "." || key == ".." {
        return Err(Error::InvalidKey(format!("'{}' is not an object name", key)));
    }
    if key.contains('\0') {
        return Err(Error::InvalidKey(format!("'{}' contains a NUL byte", key.escape_debug())));
    }
    Ok(())
}

/// Write an empty document for every kind that has no object yet
///
/// Existing objects are left alone. Returns the kinds that were seeded.
pub fn seed_defaults<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<DocumentKind>> {
    let mut seeded = Vec::new();
    for kind in DocumentKind::ALL {
        if !store.contains(kind.key())? {
            store.put(kind.key(), kind.empty_document().as_bytes())?;
            info!("Seeded empty {}", kind.key());
            seeded.push(kind);
        }
    }
    Ok(seeded)
}
