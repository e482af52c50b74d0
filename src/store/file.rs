//! File-backed key/value store.
//!
//! All keys live in a single JSON document mapping each key to its string
//! value. Writes go to a temporary file in the same directory which is then
//! atomically renamed over the document.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::KeyValueStore;

/// A [`KeyValueStore`] persisted as one JSON document on local disk.
///
/// # Example
///
/// ```no_run
/// use equity_swap_calculator::store::{FileStore, KeyValueStore};
///
/// let mut store = FileStore::new("./data/calculator.json");
/// store.set("equitySwap", "25")?;
/// assert_eq!(store.get("equitySwap")?, Some("25".to_string()));
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store persisted at `path`. The file is created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole document. A missing file is an empty document.
    fn read_entries(&self, key: &str) -> EngineResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(EngineError::StorageRead {
                    key: key.to_string(),
                    message: format!("{}: {}", self.path.display(), err),
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| EngineError::StorageRead {
            key: key.to_string(),
            message: format!("{}: {}", self.path.display(), e),
        })
    }

    /// Reads the document for modification, starting over if it is unreadable.
    fn entries_for_write(&self, key: &str) -> BTreeMap<String, String> {
        match self.read_entries(key) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Discarding unreadable store document"
                );
                BTreeMap::new()
            }
        }
    }

    fn write_entries(&self, key: &str, entries: &BTreeMap<String, String>) -> EngineResult<()> {
        let write_error = |message: String| EngineError::StorageWrite {
            key: key.to_string(),
            message: format!("{}: {}", self.path.display(), message),
        };

        let content =
            serde_json::to_string_pretty(entries).map_err(|e| write_error(e.to_string()))?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| write_error(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(|e| write_error(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| write_error(e.error.to_string()))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.read_entries(key)?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()> {
        let mut entries = self.entries_for_write(key);
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(key, &entries)
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        let mut entries = self.entries_for_write(key);
        if entries.remove(key).is_some() {
            self.write_entries(key, &entries)?;
        }
        Ok(())
    }
}
