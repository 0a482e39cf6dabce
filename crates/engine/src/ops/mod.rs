//! Document operations
//!
//! Each operation takes the current document by value plus one intent
//! and returns a [`Mutation`](crate::Mutation). Operations never fail:
//! a missing id is [`Outcome::NotFound`](crate::Outcome::NotFound) and bad
//! input is [`Outcome::Rejected`](crate::Outcome::Rejected), both leaving
//! the document as given.
//!
//! - [`trip`]: stop completion, cost, notes, raw document replace
//! - [`todo`]: add, toggle, edit, delete
//! - [`note`]: replace the general note's content

pub mod note;
pub mod todo;
pub mod trip;

pub use note::{replace_note_content, set_note_text};
pub use todo::{add_todo, delete_todo, edit_todo, toggle_todo_completion, TodoFields};
pub use trip::{
    edit_stop_cost, edit_stop_notes, finish_stop_notes, replace_trip_json, toggle_stop_completion,
};
