//! File-backed snapshot store: one JSON file holding the serialized card
//! list, replaced atomically on every save, with timestamped backup copies
//! rotated to a cap.

use flipdeck_core::{SnapshotStore, StoreError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub mod paths;

const DEFAULT_MAX_BACKUPS: usize = 10;

pub struct JsonVault {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
}

impl JsonVault {
    /// Opens the vault at the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let (file, backups) = paths::default_store_file();
        Self::open_with(file, backups, DEFAULT_MAX_BACKUPS)
    }

    /// Opens the vault at an explicit file path; backups land in a sibling
    /// directory next to it.
    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        let backups = path.with_extension("backups");
        Self::open_with(path, backups, DEFAULT_MAX_BACKUPS)
    }

    pub fn open_with(
        path: PathBuf,
        backups_dir: PathBuf,
        max_backups: usize,
    ) -> Result<Self, StoreError> {
        ensure_parent_dirs(&path)?;
        ensure_dir(&backups_dir)?;
        Ok(Self {
            path,
            backups_dir,
            max_backups: max_backups.max(1),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonVault {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read(&self.path)
            .map(Some)
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        write_with_backup(&self.path, &self.backups_dir, self.max_backups, bytes)
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(path).map_err(|e| StoreError::Write(e.to_string()))
}

fn write_with_backup(
    path: &Path,
    backups_dir: &Path,
    max_backups: usize,
    bytes: &[u8],
) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir_all(backups_dir)?;

    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    // Backup rotation
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
    let backup_path = backups_dir.join(format!("flipdeck-{ts}.json"));
    let mut btmp = NamedTempFile::new_in(backups_dir)?;
    btmp.write_all(bytes)?;
    btmp.flush()?;
    btmp.persist(&backup_path).map_err(|e| e.error)?;

    rotate_backups(backups_dir, max_backups)?;

    Ok(())
}

fn rotate_backups(dir: &Path, keep: usize) -> Result<(), std::io::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    entries.sort_by_key(|e| e.file_name());
    if entries.len() > keep {
        for e in &entries[0..entries.len() - keep] {
            let _ = fs::remove_file(e.path());
        }
    }
    Ok(())
}
