//! Per-stop note drafts and edit counters
//!
//! Editing a stop note follows a small state machine per stop:
//!
//! ```text
//!          open / update                  finish
//!  Idle ─────────────────► Drafting ───────────────────► Idle
//!                           │  ▲        (unchanged, declined, committed)
//!                           └──┘
//!                        re-entrant
//! ```
//!
//! The tracker lives next to the document, never inside it: drafts and
//! counters are not persisted. Counters survive `finish` and `discard`;
//! drafts do not.

use rustc_hash::FxHashMap;

/// Addresses one stop: day index plus stop id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopKey {
    /// Index of the day in the trip
    pub day: usize,
    /// Stop id within that day
    pub stop: String,
}

impl StopKey {
    /// Key for `stop` on day `day`
    pub fn new(day: usize, stop: impl Into<String>) -> Self {
        Self {
            day,
            stop: stop.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct NoteEditState {
    draft: Option<String>,
    edits: u32,
}

/// Drafts and committed-edit counters for stop notes
#[derive(Debug, Clone, Default)]
pub struct NoteEditTracker {
    entries: FxHashMap<StopKey, NoteEditState>,
}

impl NoteEditTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or resume) drafting, seeded with the stop's current notes
    ///
    /// Re-entrant: an existing draft is kept. Returns the draft.
    pub fn open(&mut self, key: &StopKey, current: &str) -> &str {
        self.entries
            .entry(key.clone())
            .or_default()
            .draft
            .get_or_insert_with(|| current.to_string())
    }

    /// Replace the draft text
    pub fn update(&mut self, key: &StopKey, value: impl Into<String>) {
        self.entries.entry(key.clone()).or_default().draft = Some(value.into());
    }

    /// Current draft, if drafting
    pub fn draft(&self, key: &StopKey) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.draft.as_deref())
    }

    /// Whether a draft is open for the stop
    pub fn is_drafting(&self, key: &StopKey) -> bool {
        self.draft(key).is_some()
    }

    /// Drop the draft, keeping the edit counter
    pub fn discard(&mut self, key: &StopKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.draft = None;
        }
    }

    /// Number of committed edits that count toward confirmation
    pub fn edit_count(&self, key: &StopKey) -> u32 {
        self.entries.get(key).map(|e| e.edits).unwrap_or(0)
    }

    /// Whether committing over a note needs a confirmation prompt
    ///
    /// True once the stop has been edited and its note is non-blank.
    pub fn needs_confirmation(&self, key: &StopKey, note_was_present: bool) -> bool {
        note_was_present && self.edit_count(key) >= 1
    }

    /// Record a committed edit and close the draft
    ///
    /// Editing a non-blank note increments the counter; writing into a
    /// blank note resets it to one.
    pub fn record_commit(&mut self, key: &StopKey, note_was_present: bool) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.edits = if note_was_present { entry.edits + 1 } else { 1 };
        entry.draft = None;
    }

    /// Forget everything about every stop
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
