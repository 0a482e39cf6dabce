//! Session Scenario Test Suite
//!
//! End-to-end checks of the visit lifecycle: load once, apply intents
//! through a `Session`, persist whole documents on commit.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test session_scenarios
//! cargo test --test session_scenarios trip::
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tripdeck::prelude::*;

pub mod note;
pub mod store;
pub mod todo;
pub mod trip;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Store wrapper that records every write and can be told to fail
pub struct RecordingStore {
    inner: MemoryStore,
    writes: Mutex<Vec<(String, Vec<u8>)>>,
    failing: Mutex<bool>,
}

impl RecordingStore {
    pub fn new(objects: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::with_objects(objects.iter().copied()),
            writes: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
        })
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().len()
    }

    pub fn last_write(&self) -> Option<(String, Vec<u8>)> {
        self.writes.lock().last().cloned()
    }

    pub fn fail_writes(&self, failing: bool) {
        *self.failing.lock() = failing;
    }
}

impl DocumentStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.inner.get(key)
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        if *self.failing.lock() {
            return Err(Error::Storage("bucket unreachable".into()));
        }
        self.writes.lock().push((key.to_string(), bytes.to_vec()));
        self.inner.put(key, bytes)
    }
}

/// Day 0 with one stop `s1` costing 10, not completed
pub const ONE_STOP_TRIP: &str = r#"{
  "trip": {
    "days": [{
      "meta": { "country": "Singapore", "date": "2025-06-01", "hotel": { "name": "Hotel 81", "area": "Geylang" } },
      "stops": [{
        "id": "s1", "time": "09:00", "activity": "Kaya toast", "category": "food",
        "location": "Tiong Bahru", "estimated_cost_sgd": 10, "completed": false,
        "notes": "", "movement": { "mode": "mrt+walk", "desc": "EW line" }
      }]
    }]
  }
}"#;

pub const EMPTY_TODOS: &str = r#"{"todo":[]}"#;

pub const NOTE: &str = r#"{
  "title": "General Note",
  "createdAt": "2025-05-01T00:00:00.000Z",
  "updatedAt": "2025-05-01T00:00:00.000Z",
  "content": ["passport", "adapter"]
}"#;
