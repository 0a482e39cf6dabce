//! General note document (`note.json`)
//!
//! The note body is stored as a list of lines and shown as one text block.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Document, DocumentKind};

/// The general note
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDocument {
    /// Heading
    #[serde(default)]
    pub title: String,
    /// ISO-8601 creation time
    #[serde(default)]
    pub created_at: String,
    /// ISO-8601 time of the last save
    #[serde(default)]
    pub updated_at: String,
    /// Body, one entry per line
    #[serde(default)]
    pub content: Vec<String>,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document for NoteDocument {
    const KIND: DocumentKind = DocumentKind::Note;
}

impl NoteDocument {
    /// Body as one text block
    pub fn text(&self) -> String {
        self.content.join("\n")
    }

    /// Split a text block into stored lines
    ///
    /// Always yields at least one line; an empty block is one empty line.
    pub fn split_text(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }
}
