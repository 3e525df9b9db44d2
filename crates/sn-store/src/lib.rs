//! Local persistence: a process-wide key-value store and the session
//! repository built on top of it.

pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod keys;
pub mod memory_store;
pub mod session_repository;

#[cfg(test)]
mod tests;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use key_value_store::{JsonStore, KeyValueStore};
pub use memory_store::MemoryStore;
pub use session_repository::{SessionRepository, StoreSessionRepository};
