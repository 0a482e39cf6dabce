//! Error types for TripDeck
//!
//! One error enum is shared across crates. Engine operations never return
//! these for user input: malformed input and missing ids are reported as
//! mutation outcomes. Errors here describe failures talking to the store,
//! decoding stored documents, or addressing a document that does not exist.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | NotFound | Store has no object under the key |
//! | InvalidKey | Key is empty or escapes the bucket |
//! | Parse | Text could not be decoded as the expected document |
//! | Validation | A required field is blank |
//! | Serialization | Encoding a document failed |
//! | Io | Filesystem failure |
//! | Storage | Any other store failure |
//! | Persistence | A committed mutation could not be written back |

use thiserror::Error;

/// All TripDeck errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No document stored under the key
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid storage key
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Malformed JSON or numeric input
    #[error("parse error: {0}")]
    Parse(String),

    /// Required field missing or blank
    #[error("validation failed: {0}")]
    Validation(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage error
    #[error("storage error: {0}")]
    Storage(String),

    /// The in-memory document was committed but writing it back failed
    #[error("failed to persist {key}: {reason}")]
    Persistence {
        /// Storage key of the document
        key: String,
        /// Underlying failure
        reason: String,
    },
}

/// Result type for TripDeck operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this error came from writing a committed document.
    ///
    /// The optimistic in-memory state is kept when this happens.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence { .. })
    }

    /// Check if this error is retryable.
    ///
    /// Always false: failed writes are surfaced, never retried.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Wrap any error as a persistence failure for `key`.
    pub fn persistence(key: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::Persistence {
            key: key.into(),
            reason: cause.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            Error::Parse(e.to_string())
        } else {
            Error::Serialization(e.to_string())
        }
    }
}
