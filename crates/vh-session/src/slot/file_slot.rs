use crate::{SessionSlot, SlotError, SlotResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Slot persisted as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSessionSlot {
    dir: PathBuf,
    key: String,
}

impl FileSessionSlot {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Gets the slot file path.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    /// Backs up a corrupted slot file for debugging.
    ///
    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> SlotResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{}.json.corrupted.{timestamp}", self.key));

        fs::rename(&path, &backup_path).map_err(|e| SlotError::backup_failed(e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl SessionSlot for FileSessionSlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> SlotResult<Option<String>> {
        let path = self.path();

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No session file at {path:?}");
                Ok(None)
            }
            Err(e) => Err(SlotError::file_read(path, e)),
        }
    }

    /// Saves using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn write(&self, value: &str) -> SlotResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SlotError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{}.json.tmp.{}", self.key, Uuid::new_v4()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SlotError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SlotError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SlotError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SlotError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        Ok(())
    }

    fn clear(&self) -> SlotResult<()> {
        let path = self.path();

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SlotError::remove(path, e)),
        }
    }

    fn quarantine(&self) -> SlotResult<()> {
        self.backup_corrupted().map(|_| ())
    }
}
