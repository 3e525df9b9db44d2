use crate::{KeyValueStore, StoreError, StoreResult, keys};

use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store. State is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if !keys::is_valid(key) {
            return Err(StoreError::invalid_key(key));
        }
        let mut entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
