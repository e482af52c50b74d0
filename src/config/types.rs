//! Configuration types.
//!
//! These types map directly onto `calculator.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::{FileStore, KeyValueStore, MemoryStore, SelectionLoadPolicy, SettingsStore};

/// The storage backend the calculator persists to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A JSON document on local disk.
    File,
    /// Process memory; nothing survives a restart.
    #[default]
    Memory,
}

/// Storage settings from the `storage` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which backend to use.
    #[serde(default)]
    pub backend: StorageBackend,
    /// Location of the JSON document for the file backend.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/calculator.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

/// Top-level calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where settings and the working selection are persisted.
    #[serde(default)]
    pub storage: StorageConfig,
    /// How stored selection values are reconciled with the bounds on load.
    #[serde(default)]
    pub selection_load_policy: SelectionLoadPolicy,
}

impl AppConfig {
    /// Opens the configured store.
    ///
    /// The file backend does not touch the disk until the first read or write.
    pub fn open_store(&self) -> SettingsStore<Box<dyn KeyValueStore>> {
        let backend: Box<dyn KeyValueStore> = match self.storage.backend {
            StorageBackend::File => {
                info!(path = %self.storage.path.display(), "Using file storage");
                Box::new(FileStore::new(&self.storage.path))
            }
            StorageBackend::Memory => {
                info!("Using in-memory storage");
                Box::new(MemoryStore::new())
            }
        };

        SettingsStore::with_policy(backend, self.selection_load_policy)
    }
}
