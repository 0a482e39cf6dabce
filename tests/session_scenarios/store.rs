//! Bucket Tests
//!
//! Sessions against a real directory bucket.

use tempfile::TempDir;

use crate::*;

#[test]
fn test_directory_bucket_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let deck = TripDeck::open(dir.path()).unwrap();
        let mut trip = deck.trip().unwrap();
        trip.apply(|doc| ops::replace_trip_json(doc, ONE_STOP_TRIP)).unwrap();
        trip.apply(|doc| ops::toggle_stop_completion(doc, 0, "s1")).unwrap();
    }

    let deck = TripDeck::open(dir.path()).unwrap();
    assert_eq!(deck.path(), Some(dir.path()));
    let trip = deck.trip().unwrap();
    assert!(trip.document().stop(0, "s1").unwrap().completed);
}

#[test]
fn test_open_seeds_every_document() {
    let dir = TempDir::new().unwrap();
    TripDeck::open(dir.path()).unwrap();
    for kind in DocumentKind::ALL {
        assert!(dir.path().join(kind.key()).is_file(), "{} missing", kind.key());
    }
}

#[test]
fn test_last_write_wins_between_sessions() {
    let deck = TripDeck::ephemeral().unwrap();
    let mut first = deck.todos().unwrap();
    let mut second = deck.todos().unwrap();
    let clock = tripdeck::tripdeck_engine::FixedClock::at_millis(1);

    first
        .apply(|doc| ops::add_todo(doc, "from first", None, Priority::Low, &clock))
        .unwrap();
    second
        .apply(|doc| ops::add_todo(doc, "from second", None, Priority::Low, &clock))
        .unwrap();

    let stored = deck.todos().unwrap();
    let texts: Vec<_> = stored.document().todo.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["from second"]);
}

#[test]
fn test_pins_are_read_only_through_sessions() {
    let deck = TripDeck::ephemeral().unwrap();
    let mut pins = deck.session::<PinCollection>().unwrap();
    assert!(pins.persist().unwrap_err().is_persistence());
}
