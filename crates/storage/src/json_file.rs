//! JSON file storage implementation.
//!
//! Stores the progress record as a single pretty-printed JSON file.
//! Parent directories are created on first write.

use super::{Result, Storage};
use std::fs;
use std::path::{Path, PathBuf};
use studytrack_core::ProgressRecord;

/// File-based JSON storage backend.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage backed by the file at `path`. The file itself is
    /// only created on the first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn save(&mut self, record: &ProgressRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json.as_bytes())?;
        Ok(())
    }

    fn load(&self) -> Result<Option<ProgressRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let record = serde_json::from_str(&json)?;
                Ok(Some(record))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
