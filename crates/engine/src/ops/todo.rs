//! Todo list operations

use tracing::debug;
use tripdeck_core::time::millis_id;
use tripdeck_core::{Priority, TodoDocument, TodoItem};

use crate::clock::Clock;
use crate::confirm::{Confirm, DELETE_TODO_PROMPT};
use crate::mutation::{Mutation, Rejection};

/// Editable fields of a todo, replaced together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFields {
    /// What to do
    pub text: String,
    /// Optional detail
    pub note: Option<String>,
    /// Priority
    pub priority: Priority,
}

/// Append a new, open todo
///
/// Blank text is rejected. The id is the clock's time in epoch
/// milliseconds; uniqueness is assumed, not checked.
pub fn add_todo<K: Clock + ?Sized>(
    mut doc: TodoDocument,
    text: &str,
    note: Option<&str>,
    priority: Priority,
    clock: &K,
) -> Mutation<TodoDocument> {
    if text.trim().is_empty() {
        return Mutation::rejected(doc, Rejection::Validation("todo text is blank".into()));
    }

    let item = TodoItem {
        id: millis_id(clock.now()),
        text: text.to_string(),
        note: note.filter(|n| !n.is_empty()).map(str::to_string),
        completed: false,
        priority,
        extra: Default::default(),
    };
    debug!(id = %item.id, "Added todo");
    doc.todo.push(item);
    Mutation::commit(doc)
}

/// Flip `completed` on a todo
pub fn toggle_todo_completion(mut doc: TodoDocument, id: &str) -> Mutation<TodoDocument> {
    if let Some(item) = doc.item_mut(id) {
        item.completed = !item.completed;
        debug!(id, completed = item.completed, "Toggled todo");
        return Mutation::commit(doc);
    }
    Mutation::not_found(doc)
}

/// Replace a todo's text, note and priority
pub fn edit_todo(mut doc: TodoDocument, id: &str, fields: TodoFields) -> Mutation<TodoDocument> {
    if let Some(item) = doc.item_mut(id) {
        item.text = fields.text;
        item.note = fields.note;
        item.priority = fields.priority;
        debug!(id, "Edited todo");
        return Mutation::commit(doc);
    }
    Mutation::not_found(doc)
}

/// Remove a todo after confirmation
///
/// A missing id is not found without asking.
pub fn delete_todo<C>(mut doc: TodoDocument, id: &str, confirm: &mut C) -> Mutation<TodoDocument>
where
    C: Confirm + ?Sized,
{
    let Some(position) = doc.todo.iter().position(|t| t.id == id) else {
        return Mutation::not_found(doc);
    };
    if !confirm.confirm(DELETE_TODO_PROMPT) {
        return Mutation::declined(doc);
    }
    doc.todo.remove(position);
    debug!(id, "Deleted todo");
    Mutation::commit(doc)
}
