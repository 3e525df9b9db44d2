use crate::{StoreError, StoreResult};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key-value persistence, the equivalent of browser local storage.
///
/// Writes are last-write-wins; there is no conflict detection between
/// processes sharing the same backing medium.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Drops an entry that could not be parsed. Stores that can keep a copy
    /// for inspection override this.
    fn discard_corrupted(&self, key: &str) -> StoreResult<()> {
        self.remove(key)
    }
}

/// Typed JSON access on top of any [`KeyValueStore`].
pub trait JsonStore {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>>;

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()>;

    /// Reads a JSON array, treating a missing key as empty.
    fn get_list<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        Ok(self.get_json(key)?.unwrap_or_default())
    }
}

impl<S: KeyValueStore + ?Sized> JsonStore for S {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::corrupted(key, e.to_string())),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }
}
