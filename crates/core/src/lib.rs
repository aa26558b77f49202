//! Core data models for the studytrack learning-progress toolkit.
//!
//! This crate defines the static curriculum, the durable progress record
//! and the derived recommendation types shared by the engine and its
//! consumers.

#![warn(missing_docs)]

// Identities
mod id;

// Static curriculum
mod curriculum;

// Persisted progress
mod record;

// Derived output
mod recommendation;

// Re-exports
pub use id::{BookmarkId, NoteId, UserId};

pub use curriculum::{Curriculum, CurriculumError, CurriculumUnit};
pub use record::{Bookmark, Note, ProgressRecord, UnitProgress};
pub use recommendation::{Priority, Recommendation};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
