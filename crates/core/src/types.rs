//! Document kinds and the `Document` trait
//!
//! Every stored document lives under a fixed key in the bucket:
//!
//! | Kind | Key | Writable |
//! |------|-----|----------|
//! | Trip | `trip.json` | yes |
//! | Todo | `todo.json` | yes |
//! | Note | `note.json` | yes |
//! | Pins | `pin.json` | no |

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The kind of a stored document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// The itinerary (`trip.json`)
    Trip,
    /// The todo list (`todo.json`)
    Todo,
    /// The general note (`note.json`)
    Note,
    /// Map pins (`pin.json`), read-only
    Pins,
}

impl DocumentKind {
    /// All kinds, in display order
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Trip,
        DocumentKind::Todo,
        DocumentKind::Note,
        DocumentKind::Pins,
    ];

    /// Storage key of this document
    pub fn key(&self) -> &'static str {
        match self {
            DocumentKind::Trip => "trip.json",
            DocumentKind::Todo => "todo.json",
            DocumentKind::Note => "note.json",
            DocumentKind::Pins => "pin.json",
        }
    }

    /// Name used in gateway routes (`/api/{name}`)
    pub fn name(&self) -> &'static str {
        match self {
            DocumentKind::Trip => "trip",
            DocumentKind::Todo => "todo",
            DocumentKind::Note => "note",
            DocumentKind::Pins => "pins",
        }
    }

    /// Whether clients may overwrite this document
    pub fn is_writable(&self) -> bool {
        !matches!(self, DocumentKind::Pins)
    }

    /// JSON written when a bucket has no object for this kind yet
    pub fn empty_document(&self) -> &'static str {
        match self {
            DocumentKind::Trip => r#"{"trip":{"days":[]}}"#,
            DocumentKind::Todo => r#"{"todo":[]}"#,
            DocumentKind::Note => {
                r#"{"title":"General Note","createdAt":"1970-01-01T00:00:00.000Z","updatedAt":"1970-01-01T00:00:00.000Z","content":[]}"#
            }
            DocumentKind::Pins => r#"{"type":"FeatureCollection","features":[]}"#,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::NotFound(format!("document '{}'", s)))
    }
}

/// A whole JSON document stored under one key
///
/// The unit of read and write: documents are always loaded and persisted
/// in full, never patched.
pub trait Document: Serialize + DeserializeOwned + Clone + Default + Send + 'static {
    /// Kind (and therefore storage key) of this document
    const KIND: DocumentKind;

    /// Decode a document from stored bytes
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::from)
    }

    /// Decode a document from text
    fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::from)
    }

    /// Encode the whole document for storage
    fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
