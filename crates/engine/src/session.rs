//! Canonical in-memory document with optimistic persistence
//!
//! A [`Session`] is what one page visit holds: the document read once from
//! the store, replaced wholesale by every operation.
//!
//! ```text
//! apply(op):
//!   next = op(current)          pure, never fails
//!   current = next              optimistic, before any I/O
//!   if next.outcome == Commit:
//!       store.put(whole doc)    failure surfaced, current kept
//! ```
//!
//! There is no rollback, no retry and no write queue. Two commits are two
//! independent whole-document writes; the store keeps whichever landed
//! last.

use tracing::{debug, warn};
use tripdeck_core::error::{Error, Result};
use tripdeck_core::Document;
use tripdeck_storage::DocumentStore;

use crate::mutation::{Mutation, Outcome};

/// One document plus the store it came from
pub struct Session<D: Document, S: DocumentStore> {
    store: S,
    document: D,
    writes: u64,
}

impl<D: Document, S: DocumentStore> Session<D, S> {
    /// Read the document from the store
    pub fn load(store: S) -> Result<Self> {
        let document = read::<D, S>(&store)?;
        debug!(key = D::KIND.key(), "Loaded document");
        Ok(Self {
            store,
            document,
            writes: 0,
        })
    }

    /// Start from a document already in hand
    pub fn with_document(store: S, document: D) -> Self {
        Self {
            store,
            document,
            writes: 0,
        }
    }

    /// The current in-memory document
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Give up the session, keeping the document
    pub fn into_document(self) -> D {
        self.document
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Successful writes made by this session
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Replace the in-memory document with the stored one
    pub fn reload(&mut self) -> Result<()> {
        self.document = read::<D, S>(&self.store)?;
        Ok(())
    }

    /// Apply one operation and persist it if it commits
    ///
    /// The operation's document is installed before anything is written.
    /// On `Err(Error::Persistence)` the in-memory document is the
    /// committed one and the store still holds the previous version.
    pub fn apply<F>(&mut self, op: F) -> Result<Outcome>
    where
        F: FnOnce(D) -> Mutation<D>,
    {
        let current = std::mem::take(&mut self.document);
        let Mutation { document, outcome } = op(current);
        self.document = document;

        if outcome.should_persist() {
            self.persist()?;
        } else {
            debug!(key = D::KIND.key(), %outcome, "Nothing to persist");
        }
        Ok(outcome)
    }

    /// Write the whole in-memory document to the store
    pub fn persist(&mut self) -> Result<()> {
        let key = D::KIND.key();
        if !D::KIND.is_writable() {
            return Err(Error::persistence(key, "document is read-only"));
        }

        let result = self
            .document
            .to_bytes()
            .and_then(|bytes| self.store.put(key, &bytes));

        match result {
            Ok(()) => {
                self.writes += 1;
                debug!(key, writes = self.writes, "Persisted document");
                Ok(())
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to persist document, keeping local state");
                Err(Error::persistence(key, e))
            }
        }
    }
}

fn read<D: Document, S: DocumentStore>(store: &S) -> Result<D> {
    let bytes = store.get(D::KIND.key())?;
    D::from_slice(&bytes)
}
