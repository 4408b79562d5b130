use super::{Snapshot, SnapshotStore};
use crate::error::{BookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "book".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl SnapshotStore for FileStore {
    fn read(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path).map_err(BookError::Io)?;
        let content =
            String::from_utf8(bytes).map_err(|e| BookError::CorruptFormat(e.to_string()))?;
        Snapshot::from_json(&content).map(Some)
    }

    fn write(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_parent()?;
        let content = snapshot.to_json()?;

        // Atomic write
        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, content).map_err(BookError::Io)?;
        if let Err(err) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(BookError::Io(err));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
