//! Directory-backed document store
//!
//! Each key is one file inside the bucket directory. Writes go to a
//! temporary file in the same directory which is then renamed over the
//! target, so readers see either the old or the new document.
//!
//! # Sync Modes
//!
//! | Mode | fsync | Use Case |
//! |------|-------|----------|
//! | Buffered | never | Default, laptops and dev servers |
//! | Strict | before every rename | Survive power loss after a save |

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use tripdeck_core::error::{Error, Result};

use crate::store::{validate_key, DocumentStore};

/// Document store rooted at a directory
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
    strict: bool,
}

impl DirStore {
    /// Open a bucket directory, creating it if needed
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        info!("Opened document bucket at {}", root.display());
        Ok(Self {
            root,
            strict: false,
        })
    }

    /// fsync every document before it replaces the previous one
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Bucket directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether writes are fsynced
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

impl DocumentStore for DirStore {
    fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound(key.to_string())),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;

        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(bytes)?;
        if self.strict {
            tmp.as_file().sync_all()?;
        }
        tmp.persist(&path)
            .map_err(|e| Error::Storage(format!("replace {}: {}", path.display(), e.error)))?;

        debug!("Wrote {} ({} bytes)", key, bytes.len());
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.path_for(key)?.is_file())
    }
}
