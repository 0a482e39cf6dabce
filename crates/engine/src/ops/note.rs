//! General note operations
//!
//! Unlike stop notes there is no equality check: every save commits and
//! moves `updatedAt` forward.

use tracing::debug;
use tripdeck_core::time::{parse_iso, to_iso};
use tripdeck_core::NoteDocument;

use crate::clock::Clock;
use crate::mutation::Mutation;

/// Replace the note body and stamp `updatedAt`
///
/// The new stamp is the clock's time, or the previous stamp if the clock
/// reads earlier than it.
pub fn replace_note_content<K: Clock + ?Sized>(
    mut doc: NoteDocument,
    lines: Vec<String>,
    clock: &K,
) -> Mutation<NoteDocument> {
    let now = clock.now();
    let stamp = match parse_iso(&doc.updated_at) {
        Some(previous) if previous > now => previous,
        _ => now,
    };
    doc.updated_at = to_iso(stamp);
    doc.content = lines;
    debug!(lines = doc.content.len(), updated_at = %doc.updated_at, "Saved note");
    Mutation::commit(doc)
}

/// Replace the note body from one text block
pub fn set_note_text<K: Clock + ?Sized>(
    doc: NoteDocument,
    text: &str,
    clock: &K,
) -> Mutation<NoteDocument> {
    replace_note_content(doc, NoteDocument::split_text(text), clock)
}
