//! The durable progress record and its constituents.
//!
//! Field names follow the persisted JSON format (camelCase, one document
//! per local store). Older records are accepted as long as they carry a
//! non-empty `userId` and a `units` map; the remaining collections
//! default to empty.

use crate::{BookmarkId, NoteId, Time, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn now() -> Time {
    chrono::Utc::now()
}

/// Interaction history for a single curriculum unit.
///
/// Created the first time a unit is viewed, mutated afterwards, never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitProgress {
    /// Unit key this entry belongs to
    pub unit_id: String,

    /// Resolved display title
    pub title: String,

    /// When the unit was first opened
    pub first_viewed: Time,

    /// When the unit was most recently opened
    pub last_viewed: Time,

    /// Number of times the unit was opened (>= 1)
    pub view_count: u32,

    /// Whether the reader marked the unit complete
    pub completed: bool,

    /// Cumulative reading time in seconds
    pub time_spent_seconds: u64,
}

/// A reader-created navigation bookmark.
///
/// Immutable apart from explicit removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Unique id, unique in generation order
    pub id: BookmarkId,

    /// Unit the bookmark points into
    pub unit_id: String,

    /// Optional section anchor within the unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// Display title
    pub title: String,

    /// When the bookmark was created
    pub created_at: Time,

    /// Target URL
    pub url: String,
}

/// A reader note, optionally attached to a quoted passage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique id, unique in generation order
    pub id: NoteId,

    /// Unit the note belongs to
    pub unit_id: String,

    /// Optional section anchor within the unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// Note body, mutable
    pub content: String,

    /// Immutable snapshot of the quoted passage, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,

    /// When the note was created
    pub created_at: Time,

    /// When the content was last updated
    pub updated_at: Time,
}

/// The full durable snapshot of one anonymous reader's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Anonymous reader identity, generated once per local store
    pub user_id: UserId,

    /// When the record was first created
    #[serde(default = "now")]
    pub started_at: Time,

    /// Last mutation timestamp
    #[serde(default = "now")]
    pub last_active_at: Time,

    /// Per-unit history, keyed by unit id; one entry per unit ever viewed
    pub units: HashMap<String, UnitProgress>,

    /// Bookmarks in creation order
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,

    /// Notes in creation order
    #[serde(default)]
    pub notes: Vec<Note>,

    /// Unit currently being read, used to accumulate time-on-page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_unit: Option<String>,
}

impl ProgressRecord {
    /// Fresh record for a first run: new anonymous identity, empty
    /// collections, both timestamps set to `started`.
    pub fn new(started: Time) -> Self {
        Self {
            user_id: UserId::new(),
            started_at: started,
            last_active_at: started,
            units: HashMap::new(),
            bookmarks: Vec::new(),
            notes: Vec::new(),
            current_unit: None,
        }
    }

    /// Minimal shape check applied after parsing a persisted or imported
    /// record. Parsing already guarantees `units` is a map; the id must
    /// additionally be non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.user_id.is_empty()
    }
}
