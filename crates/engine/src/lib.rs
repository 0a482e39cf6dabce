//! Mutation engine for TripDeck
//!
//! The engine holds the rules for applying one user intent to one whole
//! document. Every operation is a pure function: it takes the current
//! document by value and returns a [`Mutation`] with the next document and
//! an [`Outcome`] saying whether the change must be persisted.
//!
//! ```text
//! load (once) ──► Session ──► op(document, intent) ──► Mutation
//!                    ▲                                   │
//!                    └──── install next document ◄───────┤
//!                                                        │ Outcome::Commit
//!                                                        ▼
//!                                           DocumentStore::put(whole doc)
//! ```
//!
//! - [`ops`]: itinerary, todo and note operations
//! - [`drafts`]: per-stop note drafts and edit counters
//! - [`metrics`]: spend, budget and progress for a day
//! - [`itinerary`], [`pins`]: read-only helpers for rendering
//! - [`session`]: canonical in-memory copy with optimistic persistence
//!
//! Collaborators the engine calls out to are traits: [`Confirm`] for yes/no
//! prompts and [`Clock`] for the current time.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod confirm;
pub mod drafts;
pub mod itinerary;
pub mod metrics;
pub mod mutation;
pub mod number;
pub mod ops;
pub mod pins;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use confirm::{accept, decline, Confirm};
pub use drafts::{NoteEditTracker, StopKey};
pub use metrics::DayMetrics;
pub use mutation::{Mutation, Outcome, Rejection};
pub use session::Session;
