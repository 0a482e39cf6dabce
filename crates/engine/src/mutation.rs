//! Mutation results
//!
//! | Outcome | Document | Persist |
//! |---------|----------|---------|
//! | Commit | next version | yes |
//! | Unchanged | as given | no |
//! | NotFound | as given | no |
//! | Declined | as given | no |
//! | Rejected | as given | no |

use std::fmt;

/// Why an intent was rejected before it touched the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Malformed numeric or JSON input; the edit is discarded
    Parse(String),
    /// A required field is blank; the caller keeps its form state
    Validation(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Parse(msg) => write!(f, "parse error: {}", msg),
            Rejection::Validation(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

/// What an operation decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The document changed and must be written back
    Commit,
    /// The intent matched the current value
    Unchanged,
    /// The addressed day, stop or item does not exist
    NotFound,
    /// The confirmation prompt was answered no
    Declined,
    /// Input was rejected
    Rejected(Rejection),
}

impl Outcome {
    /// Whether the whole document must be persisted
    pub fn should_persist(&self) -> bool {
        matches!(self, Outcome::Commit)
    }

    /// Short name for logs and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Commit => "commit",
            Outcome::Unchanged => "unchanged",
            Outcome::NotFound => "not found",
            Outcome::Declined => "declined",
            Outcome::Rejected(_) => "rejected",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Rejected(reason) => write!(f, "rejected ({})", reason),
            other => f.write_str(other.as_str()),
        }
    }
}

/// The next document plus the decision that produced it
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Mutation<D> {
    /// Document to install
    pub document: D,
    /// What happened
    pub outcome: Outcome,
}

impl<D> Mutation<D> {
    /// A committed change
    pub fn commit(document: D) -> Self {
        Self {
            document,
            outcome: Outcome::Commit,
        }
    }

    /// No change, value already current
    pub fn unchanged(document: D) -> Self {
        Self {
            document,
            outcome: Outcome::Unchanged,
        }
    }

    /// No change, target missing
    pub fn not_found(document: D) -> Self {
        Self {
            document,
            outcome: Outcome::NotFound,
        }
    }

    /// No change, confirmation declined
    pub fn declined(document: D) -> Self {
        Self {
            document,
            outcome: Outcome::Declined,
        }
    }

    /// No change, input rejected
    pub fn rejected(document: D, rejection: Rejection) -> Self {
        Self {
            document,
            outcome: Outcome::Rejected(rejection),
        }
    }

    /// Whether the document must be persisted
    pub fn should_persist(&self) -> bool {
        self.outcome.should_persist()
    }

    /// `(nextDocument, shouldPersist)`
    pub fn into_parts(self) -> (D, bool) {
        let persist = self.should_persist();
        (self.document, persist)
    }
}
