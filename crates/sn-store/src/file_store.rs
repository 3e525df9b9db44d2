use crate::{KeyValueStore, StoreError, StoreResult, keys};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;
        debug!("Opened file store at {dir:?}");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[track_caller]
    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        if !keys::is_valid(key) {
            return Err(StoreError::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Moves an unreadable entry aside as `<key>.json.corrupted.<timestamp>`.
    pub fn backup_corrupted(&self, key: &str) -> StoreResult<Option<PathBuf>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.dir.join(format!("{key}.json.corrupted.{timestamp}"));

        fs::rename(&path, &backup_path)
            .map_err(|e| StoreError::atomic_rename(path.clone(), backup_path.clone(), e))?;

        warn!("Backed up corrupted '{key}' to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::file_read(path, e)),
        }
    }

    /// Writes to a temp file, syncs it, then renames it over the old value so
    /// a crash mid-write never leaves a truncated entry.
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let final_path = self.path_for(key)?;
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote '{key}' ({} bytes)", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_write(path, e)),
        }
    }

    fn discard_corrupted(&self, key: &str) -> StoreResult<()> {
        self.backup_corrupted(key)?;
        Ok(())
    }
}
