use std::sync::Arc;

use tracing::info;
use tripdeck_core::error::Result;
use tripdeck_storage::{seed_defaults, DirStore, DocumentStore, MemoryStore};

use crate::config::Config;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Bucket the documents live in
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Wrap an existing store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Open the store named by `config` and seed missing documents
    pub fn open(config: &Config) -> Result<Self> {
        let store: Arc<dyn DocumentStore> = if config.ephemeral {
            info!("Using in-memory store");
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(DirStore::open(&config.data_dir)?)
        };
        seed_defaults(store.as_ref())?;
        Ok(Self::new(store))
    }
}
