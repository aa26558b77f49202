//! Storage trait abstraction.

use studytrack_core::ProgressRecord;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend rejected the operation
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for the progress record.
///
/// One logical key: the whole record is written and read as a unit.
/// All operations are synchronous; there is no transient-failure retry
/// story because the medium is local.
pub trait Storage: Send {
    /// Write the full record through to the medium.
    fn save(&mut self, record: &ProgressRecord) -> Result<()>;

    /// Read the persisted record, `None` when nothing was ever written.
    ///
    /// A blob that exists but fails to parse is an error; callers fall
    /// back to a fresh record.
    fn load(&self) -> Result<Option<ProgressRecord>>;
}
