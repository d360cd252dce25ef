//! Key-Value Store
//!
//! The persistence seam. The browser build backs it with local storage;
//! tests and storage-less environments use [`MemoryStore`].

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{MissionError, MissionResult};

/// String key-value storage, shaped like the Web Storage API
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get_item(&self, key: &str) -> MissionResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> MissionResult<()>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut items) = store.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> MissionResult<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|e| MissionError::Storage(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> MissionResult<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| MissionError::Storage(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> MissionResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> MissionResult<()> {
        (**self).set_item(key, value)
    }
}
