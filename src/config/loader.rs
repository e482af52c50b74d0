//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::store::{KeyValueStore, SelectionLoadPolicy, SettingsStore};

use super::types::{AppConfig, StorageConfig};

/// The configuration file name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "calculator.yaml";

/// Loads and provides access to the calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── calculator.yaml   # storage backend and selection load policy
/// ```
///
/// # Example
///
/// ```no_run
/// use equity_swap_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// let store = loader.open_store();
/// let settings = store.load();
/// println!("Stock price: {}", settings.stock_price);
/// # Ok::<(), equity_swap_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `calculator.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML or unknown enum values (`ConfigParseError`)
    ///
    /// Omitted sections fall back to [`AppConfig::default`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<AppConfig>(&config_path)?;

        debug!(
            path = %config_path.display(),
            backend = ?config.storage.backend,
            policy = ?config.selection_load_policy,
            "Loaded calculator configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the storage section.
    pub fn storage(&self) -> &StorageConfig {
        &self.config.storage
    }

    /// Returns the selection load policy.
    pub fn selection_load_policy(&self) -> SelectionLoadPolicy {
        self.config.selection_load_policy
    }

    /// Opens the configured store.
    pub fn open_store(&self) -> SettingsStore<Box<dyn KeyValueStore>> {
        self.config.open_store()
    }
}
