//! Persistence for the Equity Swap Calculator.
//!
//! This module provides the [`KeyValueStore`] port over local key/value
//! storage, its in-memory and file-backed implementations, and the
//! [`SettingsStore`] that persists the settings bundle and working selection
//! on top of it.
//!
//! # Example
//!
//! ```
//! use equity_swap_calculator::store::{MemoryStore, SettingsStore};
//! use equity_swap_calculator::models::CompensationSettings;
//! use rust_decimal::Decimal;
//!
//! let mut store = SettingsStore::new(MemoryStore::new());
//! assert_eq!(store.load(), CompensationSettings::default());
//!
//! let mut settings = CompensationSettings::default();
//! settings.hourly_rate = Decimal::from(175);
//! store.save(&settings)?;
//! assert_eq!(store.load(), settings);
//! # Ok::<(), equity_swap_calculator::error::EngineError>(())
//! ```

mod file;
mod memory;
mod settings_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use settings_store::{SETTINGS_KEY, SelectionLoadPolicy, SettingsStore};

use crate::error::EngineResult;

/// Synchronous string key/value storage local to the running instance.
///
/// Implementations report unreadable state as `StorageRead` and failed writes
/// as `StorageWrite`; callers decide whether to recover.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> EngineResult<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> EngineResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> EngineResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        (**self).remove(key)
    }
}
