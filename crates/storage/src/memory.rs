//! In-memory document store
//!
//! FxHashMap behind a `parking_lot::RwLock`. No disk I/O; contents are
//! lost when the store is dropped. Used by tests and by `--ephemeral`
//! gateways.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use tripdeck_core::error::{Error, Result};

use crate::store::{validate_key, DocumentStore};

/// Document store held entirely in memory
///
/// Values are stored as `Arc<[u8]>` so a read only clones the pointer
/// under the lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<FxHashMap<String, Arc<[u8]>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `(key, bytes)` pairs
    pub fn with_objects<I, K, V>(objects: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<[u8]>,
    {
        let map = objects
            .into_iter()
            .map(|(k, v)| (k.into(), Arc::from(v.as_ref())))
            .collect();
        Self {
            objects: RwLock::new(map),
        }
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Vec<u8>> {
        validate_key(key)?;
        let bytes = self
            .objects
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NotFound(key.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.objects
            .write()
            .insert(key.to_string(), Arc::from(bytes));
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.objects.read().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_memory_store_creation() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.get("trip.json").unwrap_err().is_not_found());
    }

    #[test]
    fn test_put_replaces_whole_object() {
        let store = MemoryStore::new();
        store.put("todo.json", br#"{"todo":[{"id":"1"}]}"#).unwrap();
        store.put("todo.json", br#"{"todo":[]}"#).unwrap();
        assert_eq!(store.get("todo.json").unwrap(), br#"{"todo":[]}"#.to_vec());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_objects() {
        let store = MemoryStore::with_objects([("note.json", "{}"), ("pin.json", "[]")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("pin.json").unwrap(), b"[]".to_vec());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.put("../escape", b"{}"),
            Err(Error::InvalidKey(_))
        ));
    }

    #[test]
    fn test_concurrent_writers_last_write_wins() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..50 {
                        store.put("trip.json", format!("{{\"writer\":{}}}", i).as_bytes()).unwrap();
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let bytes = store.get("trip.json").unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["writer"].as_u64().unwrap() < 8);
    }
}
