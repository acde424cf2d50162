use crate::storage::{SlotStorage, check_quota, validate_key};
use crate::{Result as StoreResult, StoreError};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

const SLOT_EXTENSION: &str = "json";

/// Slots stored as `<dir>/<key>.json`, one file per slot.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
    quota: Option<u64>,
}

impl FileSlotStorage {
    pub fn new(dir: impl Into<PathBuf>, quota: Option<u64>) -> Self {
        Self {
            dir: dir.into(),
            quota,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{SLOT_EXTENSION}"))
    }

    /// Combined size of every slot file except `key`'s.
    fn others_total(&self, key: &str) -> StoreResult<u64> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(StoreError::read(self.dir.clone(), e)),
        };

        let own_path = self.slot_path(key);
        let mut total = 0u64;
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::read(self.dir.clone(), e))?;
            let path = entry.path();
            if path == own_path || path.extension().and_then(|e| e.to_str()) != Some(SLOT_EXTENSION)
            {
                continue;
            }
            let metadata = entry
                .metadata()
                .map_err(|e| StoreError::read(path.clone(), e))?;
            total = total.saturating_add(metadata.len());
        }

        Ok(total)
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        let path = self.slot_path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read(path, e)),
        }
    }

    /// Writes to a temp file, syncs, then renames over the slot file so a
    /// crash mid-write never leaves a truncated slot behind.
    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        if self.quota.is_some() {
            check_quota(key, self.others_total(key)?, value.len(), self.quota)?;
        }

        let final_path = self.slot_path(key);
        let temp_path = self
            .dir
            .join(format!("{key}.{SLOT_EXTENSION}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote slot '{key}' ({} bytes)", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        validate_key(key)?;
        let path = self.slot_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::remove(path, e)),
        }
    }
}
