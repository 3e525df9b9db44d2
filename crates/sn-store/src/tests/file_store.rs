use crate::{FileStore, JsonStore, KeyValueStore, StoreError};

use tempfile::TempDir;

#[test]
fn test_get_missing_key_is_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    assert!(store.get("posts").unwrap().is_none());
}

#[test]
fn test_set_then_get() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    store.set("posts", "[]").unwrap();

    assert_eq!(store.get("posts").unwrap().as_deref(), Some("[]"));
    assert!(temp.path().join("posts.json").exists());
}

#[test]
fn test_set_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    store.set("groups", "[]").unwrap();

    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["groups.json".to_string()]);
}

#[test]
fn test_last_write_wins_across_handles() {
    let temp = TempDir::new().unwrap();
    let first = FileStore::open(temp.path()).unwrap();
    let second = FileStore::open(temp.path()).unwrap();

    first.set("messages", "[1]").unwrap();
    second.set("messages", "[2]").unwrap();

    assert_eq!(first.get("messages").unwrap().as_deref(), Some("[2]"));
}

#[test]
fn test_remove_missing_key_is_ok() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    store.set("currentUser", "{}").unwrap();
    store.remove("currentUser").unwrap();
    store.remove("currentUser").unwrap();

    assert!(store.get("currentUser").unwrap().is_none());
}

#[test]
fn test_open_creates_nested_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("a").join("b");

    let store = FileStore::open(&dir).unwrap();

    assert!(dir.is_dir());
    assert_eq!(store.dir(), dir.as_path());
}

#[test]
fn test_path_like_key_rejected() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    let result = store.set("../escape", "x");

    assert!(matches!(result, Err(StoreError::InvalidKey { .. })));
}

#[test]
fn test_get_json_reports_corruption() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    store.set("posts", "{not json").unwrap();

    let result = store.get_json::<Vec<i64>>("posts");

    assert!(matches!(result, Err(StoreError::Corrupted { .. })));
}

#[test]
fn test_get_list_defaults_to_empty() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    let friends: Vec<i64> = store.get_list("friends_1").unwrap();

    assert!(friends.is_empty());
}

#[test]
fn test_backup_corrupted_moves_file_aside() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    store.set("users", "garbage").unwrap();

    let backup = store.backup_corrupted("users").unwrap();

    assert!(backup.unwrap().exists());
    assert!(store.get("users").unwrap().is_none());
    assert!(store.backup_corrupted("users").unwrap().is_none());
}
