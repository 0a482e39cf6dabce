//! Todo List Scenario Tests

use tripdeck::tripdeck_engine::{FixedClock, Rejection};

use crate::*;

const NOW: i64 = 1_717_200_000_000;

fn session() -> (Arc<RecordingStore>, Session<TodoDocument, Arc<RecordingStore>>) {
    let store = RecordingStore::new(&[("todo.json", EMPTY_TODOS)]);
    let session = Session::load(Arc::clone(&store)).unwrap();
    (store, session)
}

#[test]
fn test_add_then_toggle_twice() {
    let (store, mut session) = session();
    let clock = FixedClock::at_millis(NOW);

    let outcome = session
        .apply(|doc| ops::add_todo(doc, "Buy milk", Some(""), Priority::Low, &clock))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    let todos = &session.document().todo;
    assert_eq!(todos.len(), 1);
    assert!(!todos[0].completed);
    assert_eq!(todos[0].note, None);
    let id = todos[0].id.clone();
    assert_eq!(id, NOW.to_string());

    session.apply(|doc| ops::toggle_todo_completion(doc, &id)).unwrap();
    assert!(session.document().todo[0].completed);
    session.apply(|doc| ops::toggle_todo_completion(doc, &id)).unwrap();
    assert!(!session.document().todo[0].completed);

    assert_eq!(store.write_count(), 3);
    let saved = TodoDocument::from_slice(&store.get("todo.json").unwrap()).unwrap();
    assert_eq!(&saved, session.document());
}

#[test]
fn test_blank_todo_is_rejected_without_write() {
    let (store, mut session) = session();
    let outcome = session
        .apply(|doc| ops::add_todo(doc, "  ", None, Priority::High, &FixedClock::at_millis(NOW)))
        .unwrap();
    assert!(matches!(outcome, Outcome::Rejected(Rejection::Validation(_))));
    assert!(session.document().todo.is_empty());
    assert_eq!(store.write_count(), 0);
}

#[test]
fn test_declined_delete_does_not_write() {
    let (store, mut session) = session();
    let clock = FixedClock::at_millis(NOW);
    session
        .apply(|doc| ops::add_todo(doc, "Book hotel", None, Priority::High, &clock))
        .unwrap();
    let id = session.document().todo[0].id.clone();

    let outcome = session
        .apply(|doc| ops::delete_todo(doc, &id, &mut decline))
        .unwrap();
    assert_eq!(outcome, Outcome::Declined);
    assert_eq!(session.document().todo.len(), 1);
    assert_eq!(store.write_count(), 1);

    let outcome = session
        .apply(|doc| ops::delete_todo(doc, &id, &mut accept))
        .unwrap();
    assert_eq!(outcome, Outcome::Commit);
    assert!(session.document().todo.is_empty());
    assert_eq!(store.write_count(), 2);
}

#[test]
fn test_edit_keeps_unknown_fields() {
    let store = RecordingStore::new(&[(
        "todo.json",
        r#"{"todo":[{"id":"7","text":"Visa","completed":false,"priority":"high","due":"2025-05-20"}],"owner":"me"}"#,
    )]);
    let mut session = Session::<TodoDocument, _>::load(Arc::clone(&store)).unwrap();

    session
        .apply(|doc| {
            ops::edit_todo(
                doc,
                "7",
                ops::TodoFields {
                    text: "Visa on arrival".into(),
                    note: Some("cash only".into()),
                    priority: Priority::High,
                },
            )
        })
        .unwrap();

    let (_, bytes) = store.last_write().unwrap();
    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(raw["owner"], "me");
    assert_eq!(raw["todo"][0]["due"], "2025-05-20");
    assert_eq!(raw["todo"][0]["text"], "Visa on arrival");
    assert_eq!(raw["todo"][0]["note"], "cash only");
}
