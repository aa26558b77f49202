//! Unique identifiers for studytrack entities.
//!
//! Ids are opaque strings on the wire so that records written by older
//! clients stay readable. Freshly generated ids carry a ULID payload,
//! which makes them unique in generation order.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Anonymous identifier for a local reader.
///
/// Generated once per local store and stable for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a new anonymous UserId
    pub fn new() -> Self {
        Self(format!("user_{}", Ulid::new().to_string().to_lowercase()))
    }

    /// String form of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id carries no content.
    ///
    /// An empty id fails the minimal shape check on load and import.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a Bookmark
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(String);

impl BookmarkId {
    /// Generate a new BookmarkId
    pub fn new() -> Self {
        Self(format!("bm_{}", Ulid::new().to_string().to_lowercase()))
    }

    /// String form of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BookmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for BookmarkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::str::FromStr for BookmarkId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Unique identifier for a Note
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a new NoteId
    pub fn new() -> Self {
        Self(format!("note_{}", Ulid::new().to_string().to_lowercase()))
    }

    /// String form of the id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::str::FromStr for NoteId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
