//! Todo list document (`todo.json`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use crate::types::{Document, DocumentKind};

/// Root of the todo document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoDocument {
    /// Items in insertion order
    #[serde(default)]
    pub todo: Vec<TodoItem>,
    /// Unknown top-level fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document for TodoDocument {
    const KIND: DocumentKind = DocumentKind::Todo;
}

impl TodoDocument {
    /// Build a document from items
    pub fn from_items(todo: Vec<TodoItem>) -> Self {
        Self {
            todo,
            extra: Map::new(),
        }
    }

    /// Item with the given id
    ///
    /// Ids are assumed unique; the first match wins.
    pub fn item(&self, id: &str) -> Option<&TodoItem> {
        self.todo.iter().find(|t| t.id == id)
    }

    /// Mutable item with the given id
    pub fn item_mut(&mut self, id: &str) -> Option<&mut TodoItem> {
        self.todo.iter_mut().find(|t| t.id == id)
    }
}

/// A todo entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Creation time in epoch milliseconds, as a string
    pub id: String,
    /// What to do
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Optional detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Done or not
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Priority
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    /// Unknown fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Todo priority
///
/// Anything but `low` or `high` is kept as [`Priority::Custom`], ranks like
/// `low`, and is written back as read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Normal
    #[default]
    Low,
    /// Urgent
    High,
    /// A priority this build does not know
    Custom(String),
}

impl Priority {
    /// Stored name
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::High => "high",
            Priority::Custom(name) => name,
        }
    }

    /// Whether the item is urgent
    pub fn is_high(&self) -> bool {
        matches!(self, Priority::High)
    }
}

impl From<String> for Priority {
    fn from(name: String) -> Self {
        match name.as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Custom(name),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "low" => Ok(Priority::Low),
            "high" => Ok(Priority::High),
            other => Err(crate::error::Error::Validation(format!(
                "priority must be 'low' or 'high', got '{}'",
                other
            ))),
        }
    }
}
