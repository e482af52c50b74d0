//! Configuration loading for the Equity Swap Calculator.
//!
//! This module loads the calculator configuration from a YAML file: which
//! storage backend to persist to and how stored selections are reconciled
//! with the current bounds.
//!
//! # Example
//!
//! ```no_run
//! use equity_swap_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Storage backend: {:?}", config.storage().backend);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{AppConfig, StorageBackend, StorageConfig};
