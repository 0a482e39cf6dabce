//! Executes one CLI action against the document bucket
//!
//! Every action loads its document once into a [`Session`], applies at
//! most a handful of engine operations and renders the resulting view.

use std::fs;
use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info, warn};
use tripdeck_core::{Document, NoteDocument, PinCollection, TodoDocument, TripDocument};
use tripdeck_engine::ops::{self, TodoFields};
use tripdeck_engine::{
    accept, pins, Confirm, NoteEditTracker, Outcome, Session, StopKey, SystemClock,
};
use tripdeck_storage::DocumentStore;

use crate::format::{
    format_json, format_note, format_outcome, format_pins, format_todos, format_trip, OutputMode,
};
use crate::parse::{NoteAction, TodoAction, TripAction};

type Store = Arc<dyn DocumentStore>;

/// Store, output mode and prompt for one invocation
pub struct CliState {
    store: Store,
    mode: OutputMode,
    confirm: Box<dyn Confirm>,
}

impl CliState {
    pub fn new(store: Store, mode: OutputMode, confirm: Box<dyn Confirm>) -> Self {
        Self {
            store,
            mode,
            confirm,
        }
    }

    fn session<D: Document>(&self) -> Result<Session<D, Store>> {
        Session::load(Arc::clone(&self.store))
            .with_context(|| format!("Failed to load {}", D::KIND.key()))
    }

    // ===== Itinerary =====

    pub fn trip(&mut self, action: TripAction) -> Result<String> {
        let mut session = self.session::<TripDocument>()?;
        let (result, day) = match action {
            TripAction::Show { day } => (Ok(Outcome::Unchanged), day),
            TripAction::Toggle { day, stop } => (
                session.apply(|doc| ops::toggle_stop_completion(doc, day, &stop)),
                Some(day),
            ),
            TripAction::Cost { day, stop, value } => (
                session.apply(|doc| ops::edit_stop_cost(doc, day, &stop, &value)),
                Some(day),
            ),
            TripAction::Notes {
                day,
                stop,
                drafts,
                yes,
            } => {
                let mut always = accept;
                let confirm: &mut dyn Confirm = if yes {
                    &mut always
                } else {
                    self.confirm.as_mut()
                };
                (
                    save_notes(&mut session, day, &stop, drafts, confirm),
                    Some(day),
                )
            }
            TripAction::Import { file } => {
                let text = read_input(&file)?;
                (
                    session.apply(|doc| ops::replace_trip_json(doc, &text)),
                    None,
                )
            }
        };

        let now = Local::now().naive_local();
        self.finish(&session, result, |doc| format_trip(doc, day, now))
    }

    // ===== Todos =====

    pub fn todo(&mut self, action: TodoAction) -> Result<String> {
        let mut session = self.session::<TodoDocument>()?;
        let result = match action {
            TodoAction::List => Ok(Outcome::Unchanged),
            TodoAction::Add {
                text,
                note,
                priority,
            } => session.apply(|doc| {
                ops::add_todo(doc, &text, note.as_deref(), priority, &SystemClock)
            }),
            TodoAction::Toggle { id } => {
                session.apply(|doc| ops::toggle_todo_completion(doc, &id))
            }
            TodoAction::Edit {
                id,
                text,
                note,
                priority,
            } => {
                let fields = TodoFields {
                    text,
                    note,
                    priority,
                };
                session.apply(|doc| ops::edit_todo(doc, &id, fields))
            }
            TodoAction::Remove { id, yes } => {
                let mut always = accept;
                let confirm: &mut dyn Confirm = if yes {
                    &mut always
                } else {
                    self.confirm.as_mut()
                };
                session.apply(|doc| ops::delete_todo(doc, &id, &mut *confirm))
            }
        };
        self.finish(&session, result, format_todos)
    }

    // ===== Note =====

    pub fn note(&mut self, action: NoteAction) -> Result<String> {
        let mut session = self.session::<NoteDocument>()?;
        let result = match action {
            NoteAction::Show => Ok(Outcome::Unchanged),
            NoteAction::Set { file } => {
                let text = read_input(&file)?;
                session.apply(|doc| ops::set_note_text(doc, &text, &SystemClock))
            }
        };
        self.finish(&session, result, format_note)
    }

    // ===== Pins =====

    pub fn pins(&self, search: Option<String>) -> Result<String> {
        let session = self.session::<PinCollection>()?;
        let collection = session.document();
        let found = pins::search(collection, search.as_deref().unwrap_or(""));
        debug!(total = collection.features.len(), matched = found.len(), "Searched pins");

        match self.mode {
            OutputMode::Json if search.is_none() => Ok(format_json(collection)),
            OutputMode::Json => {
                serde_json::to_string_pretty(&found).context("Failed to encode pins")
            }
            OutputMode::Human => Ok(format_pins(&found)),
        }
    }

    /// Render the session's document after an operation
    ///
    /// A failed save still renders: the view shows the local state the user
    /// is now looking at, and the error says it was not stored.
    fn finish<D, F>(
        &self,
        session: &Session<D, Store>,
        result: tripdeck_core::Result<Outcome>,
        render: F,
    ) -> Result<String>
    where
        D: Document,
        F: FnOnce(&D) -> String,
    {
        let view = match self.mode {
            OutputMode::Json => format_json(session.document()),
            OutputMode::Human => render(session.document()),
        };

        match result {
            Ok(Outcome::Commit) => {
                info!(document = D::KIND.key(), "Saved");
                Ok(view)
            }
            Ok(outcome) => Ok(match format_outcome(&outcome) {
                Some(status) if self.mode == OutputMode::Human => format!("{}\n{}", status, view),
                _ => view,
            }),
            Err(e) if e.is_persistence() => {
                warn!(document = D::KIND.key(), error = %e, "Save failed, showing unsaved state");
                println!("{}", view);
                Err(anyhow::Error::new(e).context("Changes shown above were not saved"))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Save each draft in turn as one editing visit
///
/// The second and later overwrites of a non-blank note go through
/// `confirm`. Stops at the first failed save.
fn save_notes(
    session: &mut Session<TripDocument, Store>,
    day: usize,
    stop: &str,
    drafts: Vec<String>,
    confirm: &mut dyn Confirm,
) -> tripdeck_core::Result<Outcome> {
    let mut tracker = NoteEditTracker::new();
    let key = StopKey::new(day, stop);
    let mut last = Outcome::Unchanged;

    for draft in drafts {
        let current = session
            .document()
            .stop(day, stop)
            .map(|s| s.notes.clone())
            .unwrap_or_default();
        tracker.open(&key, &current);
        tracker.update(&key, draft);
        last = session.apply(|doc| {
            ops::finish_stop_notes(doc, &mut tracker, day, stop, &mut *confirm)
        })?;
    }
    Ok(last)
}

/// Read a file, or stdin for `-`
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}
