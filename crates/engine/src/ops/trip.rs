//! Itinerary operations
//!
//! Stops are addressed by day index and stop id. Ids never change, so the
//! same address stays valid across reorders and edits.

use tracing::debug;
use tripdeck_core::{Document, TripDocument};

use crate::confirm::{Confirm, REPEAT_NOTE_EDIT_PROMPT};
use crate::drafts::{NoteEditTracker, StopKey};
use crate::mutation::{Mutation, Rejection};
use crate::number::parse_float;

/// Flip `completed` on a stop
pub fn toggle_stop_completion(
    mut doc: TripDocument,
    day: usize,
    stop_id: &str,
) -> Mutation<TripDocument> {
    if let Some(stop) = doc.stop_mut(day, stop_id) {
        stop.completed = !stop.completed;
        debug!(day, stop_id, completed = stop.completed, "Toggled stop");
        return Mutation::commit(doc);
    }
    Mutation::not_found(doc)
}

/// Set a stop's estimated cost from raw user input
///
/// The input is read like a browser number box (`parseFloat`). Input
/// that is not a finite number is rejected and the previous cost kept.
/// Negative values pass through unchanged.
pub fn edit_stop_cost(
    mut doc: TripDocument,
    day: usize,
    stop_id: &str,
    raw: &str,
) -> Mutation<TripDocument> {
    let Some(current) = doc.stop(day, stop_id).map(|s| s.estimated_cost_sgd) else {
        return Mutation::not_found(doc);
    };

    let parsed = parse_float(raw);
    if !parsed.is_finite() {
        debug!(day, stop_id, raw, "Rejected cost edit");
        return Mutation::rejected(doc, Rejection::Parse(format!("'{}' is not a number", raw)));
    }
    if parsed == current {
        return Mutation::unchanged(doc);
    }

    if let Some(stop) = doc.stop_mut(day, stop_id) {
        stop.estimated_cost_sgd = parsed;
    }
    debug!(day, stop_id, cost = parsed, "Edited stop cost");
    Mutation::commit(doc)
}

/// Commit `draft` as a stop's notes
///
/// - Same text as stored: unchanged, draft dropped.
/// - Overwriting a non-blank note that was already edited: `confirm` is
///   asked; no drops the draft and leaves the counter alone.
/// - Otherwise the notes are replaced and the counter advanced.
pub fn edit_stop_notes<C>(
    mut doc: TripDocument,
    tracker: &mut NoteEditTracker,
    day: usize,
    stop_id: &str,
    draft: &str,
    confirm: &mut C,
) -> Mutation<TripDocument>
where
    C: Confirm + ?Sized,
{
    let key = StopKey::new(day, stop_id);
    let Some(stop) = doc.stop(day, stop_id) else {
        tracker.discard(&key);
        return Mutation::not_found(doc);
    };

    if stop.notes == draft {
        tracker.discard(&key);
        return Mutation::unchanged(doc);
    }

    let was_present = stop.has_notes();
    if tracker.needs_confirmation(&key, was_present) && !confirm.confirm(REPEAT_NOTE_EDIT_PROMPT)
    {
        debug!(day, stop_id, "Repeat note edit declined");
        tracker.discard(&key);
        return Mutation::declined(doc);
    }

    if let Some(stop) = doc.stop_mut(day, stop_id) {
        stop.notes = draft.to_string();
    }
    tracker.record_commit(&key, was_present);
    debug!(day, stop_id, edits = tracker.edit_count(&key), "Edited stop notes");
    Mutation::commit(doc)
}

/// Close an open draft, committing it through [`edit_stop_notes`]
///
/// Without an open draft the stop's current notes are used, which is
/// always unchanged.
pub fn finish_stop_notes<C>(
    doc: TripDocument,
    tracker: &mut NoteEditTracker,
    day: usize,
    stop_id: &str,
    confirm: &mut C,
) -> Mutation<TripDocument>
where
    C: Confirm + ?Sized,
{
    let key = StopKey::new(day, stop_id);
    let draft = match tracker.draft(&key) {
        Some(draft) => draft.to_string(),
        None => match doc.stop(day, stop_id) {
            Some(stop) => stop.notes.clone(),
            None => String::new(),
        },
    };
    edit_stop_notes(doc, tracker, day, stop_id, &draft, confirm)
}

/// Replace the whole itinerary with a document parsed from `text`
///
/// Malformed text is rejected and the current document kept.
pub fn replace_trip_json(doc: TripDocument, text: &str) -> Mutation<TripDocument> {
    match TripDocument::from_json(text) {
        Ok(parsed) => {
            debug!(days = parsed.trip.days.len(), "Replaced trip document");
            Mutation::commit(parsed)
        }
        Err(e) => Mutation::rejected(doc, Rejection::Parse(e.to_string())),
    }
}
