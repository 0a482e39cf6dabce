//! Itinerary Scenario Tests

use tripdeck::tripdeck_engine::Rejection;

use crate::*;

fn session() -> (Arc<RecordingStore>, Session<TripDocument, Arc<RecordingStore>>) {
    let store = RecordingStore::new(&[("trip.json", ONE_STOP_TRIP)]);
    let session = Session::load(Arc::clone(&store)).unwrap();
    (store, session)
}

fn stored(store: &RecordingStore) -> TripDocument {
    TripDocument::from_slice(&store.get("trip.json").unwrap()).unwrap()
}

// =============================================================================
// TOGGLE + COST SCENARIO
// =============================================================================

#[test]
fn test_toggle_then_cost_edits() {
    let (store, mut session) = session();

    let outcome = session
        .apply(|doc| ops::toggle_stop_completion(doc, 0, "s1"))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    let day = session.document().day(0).unwrap();
    assert!(day.stops[0].completed);
    assert_eq!(DayMetrics::of(day).total_spent, 10.0);
    assert_eq!(store.write_count(), 1);

    let outcome = session
        .apply(|doc| ops::edit_stop_cost(doc, 0, "s1", "abc"))
        .unwrap();
    assert!(matches!(outcome, Outcome::Rejected(Rejection::Parse(_))));
    assert_eq!(session.document().stop(0, "s1").unwrap().estimated_cost_sgd, 10.0);
    assert_eq!(store.write_count(), 1);

    let outcome = session
        .apply(|doc| ops::edit_stop_cost(doc, 0, "s1", "15.5"))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    assert_eq!(store.write_count(), 2);

    let (key, bytes) = store.last_write().unwrap();
    assert_eq!(key, "trip.json");
    let written = TripDocument::from_slice(&bytes).unwrap();
    assert_eq!(&written, session.document());
    let stop = written.stop(0, "s1").unwrap();
    assert_eq!(stop.estimated_cost_sgd, 15.5);
    assert!(stop.completed);
    assert_eq!(written.day(0).unwrap().meta.hotel.name, "Hotel 81");
}

#[test]
fn test_same_cost_is_not_written() {
    let (store, mut session) = session();
    let outcome = session
        .apply(|doc| ops::edit_stop_cost(doc, 0, "s1", "10"))
        .unwrap();
    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_unknown_stop_is_not_written() {
    let (store, mut session) = session();
    let before = session.document().clone();

    let outcome = session
        .apply(|doc| ops::toggle_stop_completion(doc, 3, "s1"))
        .unwrap();
    assert_eq!(outcome, Outcome::NotFound);
    let outcome = session
        .apply(|doc| ops::edit_stop_cost(doc, 0, "nope", "4"))
        .unwrap();
    assert_eq!(outcome, Outcome::NotFound);

    assert_eq!(session.document(), &before);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_toggle_keeps_custom_category() {
    let trip = ONE_STOP_TRIP.replace(r#""category": "food""#, r#""category": "museum""#);
    let store = RecordingStore::new(&[("trip.json", trip.as_str())]);
    let mut session: Session<TripDocument, _> = Session::load(Arc::clone(&store)).unwrap();

    session
        .apply(|doc| ops::toggle_stop_completion(doc, 0, "s1"))
        .unwrap();

    let (_, bytes) = store.last_write().unwrap();
    let written: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let stop = &written["trip"]["days"][0]["stops"][0];
    assert_eq!(stop["category"], "museum");
    assert_eq!(stop["completed"], true);
}

#[test]
fn test_null_notes_load_and_edit() {
    let trip = ONE_STOP_TRIP.replace(r#""notes": """#, r#""notes": null"#);
    let store = RecordingStore::new(&[("trip.json", trip.as_str())]);
    let mut session: Session<TripDocument, _> = Session::load(Arc::clone(&store)).unwrap();
    assert_eq!(session.document().stop(0, "s1").unwrap().notes, "");

    let mut tracker = NoteEditTracker::new();
    let outcome = session
        .apply(|doc| ops::edit_stop_notes(doc, &mut tracker, 0, "s1", "bring cash", &mut decline))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    assert_eq!(stored(&store).stop(0, "s1").unwrap().notes, "bring cash");
}

// =============================================================================
// STOP NOTES
// =============================================================================

#[test]
fn test_repeat_note_edit_needs_confirmation() {
    let (store, mut session) = session();
    let mut tracker = NoteEditTracker::new();

    // Blank note: first edit commits without asking
    let mut asked = 0;
    let mut count = |_: &str| {
        asked += 1;
        false
    };
    let outcome = session
        .apply(|doc| ops::edit_stop_notes(doc, &mut tracker, 0, "s1", "bring cash", &mut count))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);

    // Non-blank and already edited: asked, declined, nothing changes
    let outcome = session
        .apply(|doc| ops::edit_stop_notes(doc, &mut tracker, 0, "s1", "bring card", &mut count))
        .unwrap();
    assert_eq!(outcome, Outcome::Declined);
    assert_eq!(asked, 1);
    assert_eq!(session.document().stop(0, "s1").unwrap().notes, "bring cash");

    let key = StopKey::new(0, "s1");
    assert_eq!(tracker.edit_count(&key), 1);
    assert_eq!(store.write_count(), 1);

    // Accepted this time
    let outcome = session
        .apply(|doc| ops::edit_stop_notes(doc, &mut tracker, 0, "s1", "bring card", &mut accept))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    assert_eq!(tracker.edit_count(&key), 2);
    assert_eq!(stored(&store).stop(0, "s1").unwrap().notes, "bring card");
}

#[test]
fn test_draft_flow_through_finish() {
    let (store, mut session) = session();
    let mut tracker = NoteEditTracker::new();
    let key = StopKey::new(0, "s1");

    assert_eq!(tracker.open(&key, ""), "");
    tracker.update(&key, "queue early");
    assert!(tracker.is_drafting(&key));

    let outcome = session
        .apply(|doc| ops::finish_stop_notes(doc, &mut tracker, 0, "s1", &mut decline))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    assert!(!tracker.is_drafting(&key));
    assert_eq!(stored(&store).stop(0, "s1").unwrap().notes, "queue early");
}

// =============================================================================
// JSON IMPORT
// =============================================================================

#[test]
fn test_malformed_import_is_not_written() {
    let (store, mut session) = session();
    let before = session.document().clone();

    let outcome = session
        .apply(|doc| ops::replace_trip_json(doc, "{\"trip\": "))
        .unwrap();
    assert!(matches!(outcome, Outcome::Rejected(Rejection::Parse(_))));
    assert_eq!(session.document(), &before);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_import_replaces_whole_document() {
    let (store, mut session) = session();
    let outcome = session
        .apply(|doc| ops::replace_trip_json(doc, r#"{"trip":{"days":[]}}"#))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    assert!(stored(&store).trip.days.is_empty());
}

// =============================================================================
// PERSISTENCE FAILURE
// =============================================================================

#[test]
fn test_failed_save_keeps_optimistic_state() {
    let (store, mut session) = session();
    store.fail_writes(true);

    let err = session
        .apply(|doc| ops::toggle_stop_completion(doc, 0, "s1"))
        .unwrap_err();
    assert!(err.is_persistence());
    assert!(!err.is_retryable());
    assert!(session.document().stop(0, "s1").unwrap().completed);
    assert!(!stored(&store).stop(0, "s1").unwrap().completed);

    // The next commit writes the whole document, including the earlier toggle
    store.fail_writes(false);
    session
        .apply(|doc| ops::edit_stop_cost(doc, 0, "s1", "12"))
        .unwrap();
    let saved = stored(&store);
    assert!(saved.stop(0, "s1").unwrap().completed);
    assert_eq!(saved.stop(0, "s1").unwrap().estimated_cost_sgd, 12.0);
}
