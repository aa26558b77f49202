//! In-memory storage backend.
//!
//! Holds the serialized blob the way a browser key-value store would, so
//! tests exercise the same parse path as the file backend, including
//! corruption recovery.

use super::{Result, Storage};
use studytrack_core::ProgressRecord;

/// Storage backend keeping the serialized record in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
}

impl MemoryStorage {
    /// Empty store, as on a first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw blob, valid or not.
    pub fn with_raw(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// The raw persisted blob, if any.
    pub fn raw(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, record: &ProgressRecord) -> Result<()> {
        self.blob = Some(serde_json::to_string(record)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<ProgressRecord>> {
        match &self.blob {
            Some(json) => {
                let record = serde_json::from_str(json)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_none() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut storage = MemoryStorage::new();
        let record = ProgressRecord::new(chrono::Utc::now());
        storage.save(&record).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.user_id, record.user_id);
    }

    #[test]
    fn corrupt_blob_is_a_json_error() {
        let storage = MemoryStorage::with_raw("{truncated");
        assert!(matches!(
            storage.load(),
            Err(super::super::StorageError::Json(_))
        ));
    }
}
