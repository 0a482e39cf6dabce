//! General Note Scenario Tests

use tripdeck::tripdeck_engine::FixedClock;

use crate::*;

#[test]
fn test_every_save_commits_and_advances_updated_at() {
    let store = RecordingStore::new(&[("note.json", NOTE)]);
    let mut session = Session::<NoteDocument, _>::load(Arc::clone(&store)).unwrap();
    let unchanged = session.document().content.clone();

    let outcome = session
        .apply(|doc| ops::replace_note_content(doc, unchanged, &FixedClock::at_millis(1_748_736_000_000)))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    assert_eq!(store.write_count(), 1);
    assert_eq!(session.document().updated_at, "2025-06-01T00:00:00.000Z");
    assert_eq!(session.document().created_at, "2025-05-01T00:00:00.000Z");

    // A clock behind the stored stamp never moves it back
    session
        .apply(|doc| ops::set_note_text(doc, "passport", &FixedClock::at_millis(0)))
        .unwrap();
    assert_eq!(session.document().updated_at, "2025-06-01T00:00:00.000Z");
    assert_eq!(session.document().text(), "passport");
    assert_eq!(store.write_count(), 2);
}

#[test]
fn test_text_block_round_trips_lines() {
    let store = RecordingStore::new(&[("note.json", NOTE)]);
    let mut session = Session::<NoteDocument, _>::load(Arc::clone(&store)).unwrap();
    assert_eq!(session.document().text(), "passport\nadapter");

    session
        .apply(|doc| ops::set_note_text(doc, "passport\n\nsunscreen", &SystemClock))
        .unwrap();
    let (_, bytes) = store.last_write().unwrap();
    let saved = NoteDocument::from_slice(&bytes).unwrap();
    assert_eq!(saved.content, vec!["passport", "", "sunscreen"]);
}
