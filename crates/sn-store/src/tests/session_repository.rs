use crate::tests::sample_user;
use crate::{
    FileStore, KeyValueStore, MemoryStore, SessionRepository, StoreSessionRepository, keys,
};

use std::sync::Arc;

use tempfile::TempDir;

#[test]
fn test_load_without_session_is_none() {
    let repo = StoreSessionRepository::new(Arc::new(MemoryStore::new()));

    assert!(repo.load().unwrap().is_none());
}

#[test]
fn test_save_then_load_returns_user() {
    let repo = StoreSessionRepository::new(Arc::new(MemoryStore::new()));
    let user = sample_user();

    repo.save(&user).unwrap();

    assert_eq!(repo.load().unwrap(), Some(user));
}

#[test]
fn test_clear_removes_session() {
    let store = Arc::new(MemoryStore::new());
    let repo = StoreSessionRepository::new(store.clone());
    repo.save(&sample_user()).unwrap();

    repo.clear().unwrap();

    assert!(repo.load().unwrap().is_none());
    assert!(store.get(keys::CURRENT_USER).unwrap().is_none());
}

#[test]
fn test_corrupted_session_reads_as_logged_out() {
    let store = Arc::new(MemoryStore::new());
    store.set(keys::CURRENT_USER, "{\"id\":").unwrap();
    let repo = StoreSessionRepository::new(store.clone());

    assert!(repo.load().unwrap().is_none());
    assert!(store.get(keys::CURRENT_USER).unwrap().is_none());
}

#[test]
fn test_session_survives_reopen_of_file_store() {
    let temp = TempDir::new().unwrap();
    let user = sample_user();

    {
        let repo = StoreSessionRepository::new(Arc::new(FileStore::open(temp.path()).unwrap()));
        repo.save(&user).unwrap();
    }

    let reopened = StoreSessionRepository::new(Arc::new(FileStore::open(temp.path()).unwrap()));
    assert_eq!(reopened.load().unwrap(), Some(user));
}

#[test]
fn test_corrupted_session_in_file_store_is_kept_aside() {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(FileStore::open(temp.path()).unwrap());
    store.set(keys::CURRENT_USER, "{broken").unwrap();
    let repo = StoreSessionRepository::new(store.clone());

    assert!(repo.load().unwrap().is_none());
    assert!(store.get(keys::CURRENT_USER).unwrap().is_none());

    let backups: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("currentUser.json.corrupted.")
        })
        .collect();
    assert_eq!(backups.len(), 1);
}
