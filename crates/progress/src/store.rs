//! The progress store: state lifecycle, mutations and derivations.
//!
//! One explicit instance owns the record for the lifetime of the local
//! store; consumers receive it by reference. Every mutation writes the
//! full record through to storage. A failed write is logged and
//! swallowed, the in-memory state stays authoritative for the session.

use std::collections::HashSet;
use std::sync::Arc;

use studytrack_core::{
    Bookmark, BookmarkId, Curriculum, CurriculumUnit, Note, NoteId, Priority, ProgressRecord,
    Recommendation, Time, UnitProgress,
};
use studytrack_storage::Storage;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};

/// Collapse a hierarchical page id down to its top-level unit id.
///
/// Docs platforms report nested pages as `"unit/index"` or
/// `"unit/section"`; all pages of a unit count toward one entry.
pub fn unit_id_from_page_id(page_id: &str) -> &str {
    match page_id.find('/') {
        Some(pos) => &page_id[..pos],
        None => page_id,
    }
}

/// Owner of the durable progress record and the recommendation logic.
pub struct ProgressStore {
    curriculum: Curriculum,
    storage: Box<dyn Storage>,
    record: ProgressRecord,
    clock: Arc<dyn Clock>,
    /// When timing of the current unit started; None until a view is tracked.
    unit_started_at: Option<Time>,
}

impl ProgressStore {
    /// Open the store against the wall clock.
    pub fn new(curriculum: Curriculum, storage: Box<dyn Storage>) -> Self {
        Self::with_clock(curriculum, storage, Arc::new(SystemClock))
    }

    /// Open the store with an injected clock.
    ///
    /// Loads the persisted record if one exists and passes the shape
    /// check; anything absent, malformed or ill-shaped falls back to a
    /// fresh record with a new anonymous identity.
    pub fn with_clock(
        curriculum: Curriculum,
        storage: Box<dyn Storage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let loaded = match storage.load() {
            Ok(Some(record)) if record.is_well_formed() => Some(record),
            Ok(Some(_)) => {
                warn!("persisted progress record failed shape check, starting fresh");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to load persisted progress, starting fresh");
                None
            }
        };

        let mut store = Self {
            curriculum,
            storage,
            record: ProgressRecord::new(clock.now()),
            clock,
            unit_started_at: None,
        };
        match loaded {
            Some(record) => store.record = record,
            // First run: write the fresh record through immediately so the
            // identity is durable.
            None => store.persist(),
        }
        store
    }

    /// The curriculum this store ranks against.
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    /// The current in-memory record.
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    // === View tracking ===

    /// Record that a unit page was opened.
    ///
    /// Flushes elapsed reading time into the previously current unit,
    /// creates or bumps this unit's entry, makes it current and restarts
    /// the elapsed-time clock.
    pub fn track_unit_view(&mut self, unit_id: &str, title_hint: Option<&str>) {
        let now = self.clock.now();
        self.flush_current_unit_time(now);

        match self.record.units.get_mut(unit_id) {
            Some(entry) => {
                entry.last_viewed = now;
                entry.view_count += 1;
            }
            None => {
                // Title resolution: explicit hint, then curriculum, then raw id.
                let title = title_hint
                    .map(str::to_string)
                    .or_else(|| self.curriculum.unit(unit_id).map(|u| u.title.clone()))
                    .unwrap_or_else(|| unit_id.to_string());

                self.record.units.insert(
                    unit_id.to_string(),
                    UnitProgress {
                        unit_id: unit_id.to_string(),
                        title,
                        first_viewed: now,
                        last_viewed: now,
                        view_count: 1,
                        completed: false,
                        time_spent_seconds: 0,
                    },
                );
            }
        }

        self.record.current_unit = Some(unit_id.to_string());
        self.unit_started_at = Some(now);
        self.record.last_active_at = now;
        self.persist();
    }

    /// Add elapsed seconds to the unit that was current until `now`.
    ///
    /// Skips silently when that unit no longer has an entry.
    fn flush_current_unit_time(&mut self, now: Time) {
        let (Some(current), Some(started)) = (self.record.current_unit.clone(), self.unit_started_at)
        else {
            return;
        };
        let elapsed = (now - started).num_seconds().max(0) as u64;
        if let Some(entry) = self.record.units.get_mut(&current) {
            entry.time_spent_seconds += elapsed;
        }
    }

    // === Completion ===

    /// Mark a unit complete. No-op for units never viewed.
    pub fn mark_unit_completed(&mut self, unit_id: &str) {
        self.set_completed(unit_id, true);
    }

    /// Mark a unit incomplete. No-op for units never viewed.
    pub fn mark_unit_incomplete(&mut self, unit_id: &str) {
        self.set_completed(unit_id, false);
    }

    fn set_completed(&mut self, unit_id: &str, completed: bool) {
        let Some(entry) = self.record.units.get_mut(unit_id) else {
            debug!(unit_id, "completion toggle on unseen unit ignored");
            return;
        };
        entry.completed = completed;
        self.persist();
    }

    /// Whether a unit has ever been viewed.
    pub fn has_viewed(&self, unit_id: &str) -> bool {
        self.record.units.contains_key(unit_id)
    }

    /// Whether a unit is marked complete.
    pub fn is_completed(&self, unit_id: &str) -> bool {
        self.record
            .units
            .get(unit_id)
            .map(|u| u.completed)
            .unwrap_or(false)
    }

    // === Bookmarks ===

    /// Append a bookmark, returning its fresh id.
    pub fn add_bookmark(
        &mut self,
        unit_id: &str,
        title: &str,
        url: &str,
        section_id: Option<&str>,
    ) -> BookmarkId {
        let id = BookmarkId::new();
        self.record.bookmarks.push(Bookmark {
            id: id.clone(),
            unit_id: unit_id.to_string(),
            section_id: section_id.map(str::to_string),
            title: title.to_string(),
            created_at: self.clock.now(),
            url: url.to_string(),
        });
        self.persist();
        id
    }

    /// Remove a bookmark by id. No-op when absent.
    pub fn remove_bookmark(&mut self, bookmark_id: &BookmarkId) {
        self.record.bookmarks.retain(|b| &b.id != bookmark_id);
        self.persist();
    }

    /// All bookmarks in creation order.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.record.bookmarks
    }

    // === Notes ===

    /// Append a note, returning its fresh id.
    pub fn add_note(
        &mut self,
        unit_id: &str,
        content: &str,
        selected_text: Option<&str>,
        section_id: Option<&str>,
    ) -> NoteId {
        let now = self.clock.now();
        let id = NoteId::new();
        self.record.notes.push(Note {
            id: id.clone(),
            unit_id: unit_id.to_string(),
            section_id: section_id.map(str::to_string),
            content: content.to_string(),
            selected_text: selected_text.map(str::to_string),
            created_at: now,
            updated_at: now,
        });
        self.persist();
        id
    }

    /// Replace a note's content and refresh its update timestamp.
    /// No-op when the id is not found.
    pub fn update_note(&mut self, note_id: &NoteId, content: &str) {
        let Some(note) = self.record.notes.iter_mut().find(|n| &n.id == note_id) else {
            return;
        };
        note.content = content.to_string();
        note.updated_at = self.clock.now();
        self.persist();
    }

    /// Remove a note by id. No-op when absent.
    pub fn remove_note(&mut self, note_id: &NoteId) {
        self.record.notes.retain(|n| &n.id != note_id);
        self.persist();
    }

    /// Notes attached to one unit, in creation order.
    pub fn notes_for_unit(&self, unit_id: &str) -> Vec<&Note> {
        self.record
            .notes
            .iter()
            .filter(|n| n.unit_id == unit_id)
            .collect()
    }

    /// All notes in creation order.
    pub fn all_notes(&self) -> &[Note] {
        &self.record.notes
    }

    // === Derivations ===

    /// Completed units as a share of the full curriculum, rounded to a
    /// whole percent. The denominator is the fixed curriculum size, not
    /// the viewed count.
    pub fn completion_percentage(&self) -> u8 {
        let total = self.curriculum.len();
        if total == 0 {
            return 0;
        }
        let completed = self.record.units.values().filter(|u| u.completed).count();
        ((completed as f64 / total as f64) * 100.0).round() as u8
    }

    /// Number of units ever viewed.
    pub fn viewed_unit_count(&self) -> usize {
        self.record.units.len()
    }

    /// Total reading time in seconds: all persisted per-unit sums plus
    /// the live, not-yet-flushed time of the current unit.
    pub fn total_time_spent(&self) -> u64 {
        let mut total: u64 = self
            .record
            .units
            .values()
            .map(|u| u.time_spent_seconds)
            .sum();

        if self.record.current_unit.is_some() {
            if let Some(started) = self.unit_started_at {
                total += (self.clock.now() - started).num_seconds().max(0) as u64;
            }
        }

        total
    }

    /// Ranked reading suggestions, recomputed from scratch on each call.
    ///
    /// Completed units are skipped. A unit with an unviewed prerequisite
    /// is withheld entirely; once every prerequisite is viewed the unit
    /// appears, and once every prerequisite is completed it is framed as
    /// ready to start. Output is ordered by priority, then curriculum
    /// order.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        let viewed: HashSet<&str> = self.record.units.keys().map(String::as_str).collect();
        let completed: HashSet<&str> = self
            .record
            .units
            .iter()
            .filter(|(_, u)| u.completed)
            .map(|(id, _)| id.as_str())
            .collect();

        let mut recommendations = Vec::new();
        for unit in self.curriculum.units() {
            if completed.contains(unit.id.as_str()) {
                continue;
            }

            let prerequisites_met = unit
                .prerequisites
                .iter()
                .all(|p| viewed.contains(p.as_str()));
            if !prerequisites_met {
                // Gated, not an error: the unit reappears once its
                // prerequisites have been viewed.
                continue;
            }

            let (priority, reason) = if !viewed.contains(unit.id.as_str()) {
                let prerequisites_completed = unit
                    .prerequisites
                    .iter()
                    .all(|p| completed.contains(p.as_str()));

                if unit.prerequisites.is_empty() {
                    (Priority::High, "Start here".to_string())
                } else if prerequisites_completed {
                    (
                        Priority::High,
                        format!(
                            "Ready to start after completing {}",
                            self.prerequisite_titles(unit)
                        ),
                    )
                } else {
                    (Priority::Medium, "Available to explore".to_string())
                }
            } else {
                let visits = self
                    .record
                    .units
                    .get(&unit.id)
                    .map(|u| u.view_count)
                    .unwrap_or(1);
                (
                    Priority::High,
                    format!(
                        "Continue reading ({} visit{})",
                        visits,
                        if visits == 1 { "" } else { "s" }
                    ),
                )
            };

            recommendations.push(Recommendation {
                unit_id: unit.id.clone(),
                title: unit.title.clone(),
                reason,
                priority,
            });
        }

        // Stable sort: priority rank first, curriculum order second.
        recommendations.sort_by_key(|r| {
            (
                r.priority,
                self.curriculum.unit(&r.unit_id).map(|u| u.order).unwrap_or(0),
            )
        });
        recommendations
    }

    fn prerequisite_titles(&self, unit: &CurriculumUnit) -> String {
        unit.prerequisites
            .iter()
            .map(|p| {
                self.curriculum
                    .unit(p)
                    .map(|u| u.title.clone())
                    .unwrap_or_else(|| p.clone())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    // === Export / import / reset ===

    /// Full-fidelity dump of the record as pretty JSON.
    pub fn export_progress(&self) -> String {
        serde_json::to_string_pretty(&self.record).unwrap_or_default()
    }

    /// Replace the record with an imported dump.
    ///
    /// Returns `false` and leaves existing state untouched when the
    /// payload fails to parse or fails the minimal shape check.
    pub fn import_progress(&mut self, data: &str) -> bool {
        let Ok(record) = serde_json::from_str::<ProgressRecord>(data) else {
            return false;
        };
        if !record.is_well_formed() {
            return false;
        }
        self.record = record;
        self.persist();
        true
    }

    /// Discard all state and reinitialize as on first run, with a new
    /// anonymous identity.
    pub fn reset_progress(&mut self) {
        self.record = ProgressRecord::new(self.clock.now());
        self.unit_started_at = None;
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.record) {
            warn!(error = %e, "failed to persist progress record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, Utc};
    use studytrack_storage::{MemoryStorage, Result as StorageResult, StorageError};

    /// Backend that accepts nothing, for the swallowed-write contract.
    struct FailingStorage;

    impl Storage for FailingStorage {
        fn save(&mut self, _record: &ProgressRecord) -> StorageResult<()> {
            Err(StorageError::Unavailable("sink rejected write".to_string()))
        }

        fn load(&self) -> StorageResult<Option<ProgressRecord>> {
            Ok(None)
        }
    }

    fn unit(id: &str, title: &str, order: u32, prerequisites: &[&str]) -> CurriculumUnit {
        CurriculumUnit {
            id: id.to_string(),
            title: title.to_string(),
            order,
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn two_unit_curriculum() -> Curriculum {
        Curriculum::new(vec![
            unit("a", "Alpha", 0, &[]),
            unit("b", "Beta", 1, &["a"]),
        ])
        .unwrap()
    }

    fn store_with_clock(curriculum: Curriculum) -> (ProgressStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let store = ProgressStore::with_clock(
            curriculum,
            Box::new(MemoryStorage::new()),
            clock.clone(),
        );
        (store, clock)
    }

    #[test]
    fn fresh_store_initializes_and_persists() {
        let (store, _clock) = store_with_clock(two_unit_curriculum());
        assert!(store.record().is_well_formed());
        assert_eq!(store.viewed_unit_count(), 0);
        assert_eq!(store.completion_percentage(), 0);
    }

    #[test]
    fn corrupt_persisted_blob_falls_back_to_fresh_record() {
        let store = ProgressStore::new(
            two_unit_curriculum(),
            Box::new(MemoryStorage::with_raw("not json at all")),
        );
        assert!(store.record().is_well_formed());
        assert_eq!(store.viewed_unit_count(), 0);
    }

    #[test]
    fn ill_shaped_blob_falls_back_to_fresh_record() {
        let store = ProgressStore::new(
            two_unit_curriculum(),
            Box::new(MemoryStorage::with_raw(r#"{"userId": "", "units": {}}"#)),
        );
        assert!(store.record().is_well_formed());
        assert!(!store.record().user_id.is_empty());
    }

    #[test]
    fn valid_persisted_record_is_reused() {
        let mut seed = ProgressStore::new(two_unit_curriculum(), Box::new(MemoryStorage::new()));
        seed.track_unit_view("a", None);
        let blob = seed.export_progress();

        let store = ProgressStore::new(
            two_unit_curriculum(),
            Box::new(MemoryStorage::with_raw(blob)),
        );
        assert_eq!(store.record().user_id, seed.record().user_id);
        assert!(store.has_viewed("a"));
    }

    #[test]
    fn view_count_is_monotonic_per_view() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        for _ in 0..5 {
            store.track_unit_view("a", None);
        }
        assert_eq!(store.record().units["a"].view_count, 5);
    }

    #[test]
    fn first_view_resolves_title_from_hint_then_curriculum_then_id() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        store.track_unit_view("a", Some("Alpha (override)"));
        store.track_unit_view("b", None);
        store.track_unit_view("off-curriculum", None);

        assert_eq!(store.record().units["a"].title, "Alpha (override)");
        assert_eq!(store.record().units["b"].title, "Beta");
        assert_eq!(store.record().units["off-curriculum"].title, "off-curriculum");
    }

    #[test]
    fn time_accrues_to_previous_unit_on_next_view() {
        let (mut store, clock) = store_with_clock(two_unit_curriculum());
        store.track_unit_view("a", None);
        clock.advance(Duration::seconds(90));
        store.track_unit_view("b", None);

        assert_eq!(store.record().units["a"].time_spent_seconds, 90);
        let b = &store.record().units["b"];
        assert_eq!(b.view_count, 1);
        assert_eq!(b.time_spent_seconds, 0);
    }

    #[test]
    fn total_time_includes_live_current_unit() {
        let (mut store, clock) = store_with_clock(two_unit_curriculum());
        store.track_unit_view("a", None);
        clock.advance(Duration::seconds(30));
        assert_eq!(store.total_time_spent(), 30);
        clock.advance(Duration::seconds(15));
        // Two consecutive reads grow with no tracking event in between.
        assert_eq!(store.total_time_spent(), 45);
        // Nothing flushed into the record yet.
        assert_eq!(store.record().units["a"].time_spent_seconds, 0);
    }

    #[test]
    fn completion_requires_a_viewed_unit() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        store.mark_unit_completed("a");
        assert!(!store.has_viewed("a"));
        assert_eq!(store.completion_percentage(), 0);

        store.track_unit_view("a", None);
        store.mark_unit_completed("a");
        assert!(store.is_completed("a"));
        // Idempotent in both directions.
        store.mark_unit_completed("a");
        assert!(store.is_completed("a"));
        store.mark_unit_incomplete("a");
        store.mark_unit_incomplete("a");
        assert!(!store.is_completed("a"));
    }

    #[test]
    fn completion_percentage_rounds_over_full_curriculum() {
        let curriculum = Curriculum::builtin();
        let first_two: Vec<String> = curriculum
            .units()
            .iter()
            .take(2)
            .map(|u| u.id.clone())
            .collect();

        let (mut store, _clock) = store_with_clock(curriculum);
        for id in &first_two {
            store.track_unit_view(id, None);
            store.mark_unit_completed(id);
        }
        // round(2 / 7 * 100) == 29
        assert_eq!(store.completion_percentage(), 29);
    }

    #[test]
    fn bookmarks_append_and_remove() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        let first = store.add_bookmark("a", "Alpha intro", "/docs/a", None);
        let second = store.add_bookmark("a", "Alpha details", "/docs/a#details", Some("details"));
        assert_ne!(first, second);
        assert_eq!(store.bookmarks().len(), 2);
        assert_eq!(store.bookmarks()[0].id, first);

        store.remove_bookmark(&first);
        assert_eq!(store.bookmarks().len(), 1);
        // Removing an unknown id is a no-op.
        store.remove_bookmark(&"bm_missing".into());
        assert_eq!(store.bookmarks().len(), 1);
    }

    #[test]
    fn notes_update_refreshes_timestamp() {
        let (mut store, clock) = store_with_clock(two_unit_curriculum());
        let id = store.add_note("a", "first draft", Some("quoted passage"), None);
        let created = store.all_notes()[0].created_at;

        clock.advance(Duration::seconds(10));
        store.update_note(&id, "second draft");

        let note = &store.all_notes()[0];
        assert_eq!(note.content, "second draft");
        assert_eq!(note.created_at, created);
        assert_eq!(note.updated_at - created, Duration::seconds(10));
        assert_eq!(note.selected_text.as_deref(), Some("quoted passage"));

        // Unknown ids are ignored.
        store.update_note(&"note_missing".into(), "ignored");
        assert_eq!(store.all_notes()[0].content, "second draft");

        store.remove_note(&id);
        assert!(store.all_notes().is_empty());
    }

    #[test]
    fn notes_filter_by_unit() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        store.add_note("a", "on alpha", None, None);
        store.track_unit_view("a", None);
        store.track_unit_view("b", None);
        store.add_note("b", "on beta", None, None);

        assert_eq!(store.notes_for_unit("a").len(), 1);
        assert_eq!(store.notes_for_unit("b").len(), 1);
        assert_eq!(store.all_notes().len(), 2);
    }

    #[test]
    fn gated_unit_is_withheld_until_prerequisite_viewed() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());

        let recs = store.recommendations();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].unit_id, "a");
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].reason, "Start here");

        // Viewing (not completing) the prerequisite unlocks the gated unit.
        store.track_unit_view("a", None);
        let recs = store.recommendations();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].unit_id, "a");
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].reason, "Continue reading (1 visit)");
        assert_eq!(recs[1].unit_id, "b");
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[1].reason, "Available to explore");
    }

    #[test]
    fn completed_prerequisites_upgrade_to_ready_framing() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        store.track_unit_view("a", None);
        store.mark_unit_completed("a");

        let recs = store.recommendations();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].unit_id, "b");
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].reason, "Ready to start after completing Alpha");
    }

    #[test]
    fn continue_reading_pluralizes_visits() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        store.track_unit_view("a", None);
        store.track_unit_view("a", None);
        store.track_unit_view("a", None);

        let recs = store.recommendations();
        assert_eq!(recs[0].reason, "Continue reading (3 visits)");
    }

    #[test]
    fn recommendations_sort_by_priority_then_order() {
        let curriculum = Curriculum::new(vec![
            unit("a", "Alpha", 0, &[]),
            unit("b", "Beta", 1, &["a"]),
            unit("c", "Gamma", 2, &[]),
        ])
        .unwrap();
        let (mut store, _clock) = store_with_clock(curriculum);
        store.track_unit_view("a", None);

        let recs = store.recommendations();
        let ids: Vec<&str> = recs.iter().map(|r| r.unit_id.as_str()).collect();
        // High first (continue a, start c), then the merely-unlocked b.
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn export_import_round_trip_preserves_reads() {
        let (mut store, clock) = store_with_clock(Curriculum::builtin());
        store.track_unit_view("intro", None);
        clock.advance(Duration::seconds(120));
        store.track_unit_view("chapter-1-physical-ai", None);
        store.mark_unit_completed("intro");
        store.add_bookmark("intro", "Opening", "/docs/intro", None);
        store.add_note("intro", "remember this", None, None);

        let before_percentage = store.completion_percentage();
        let before_recs = store.recommendations();
        let dump = store.export_progress();

        assert!(store.import_progress(&dump));
        assert_eq!(store.completion_percentage(), before_percentage);
        assert_eq!(store.bookmarks().len(), 1);
        assert_eq!(store.all_notes().len(), 1);
        assert_eq!(store.record().units["intro"].time_spent_seconds, 120);

        let after_recs = store.recommendations();
        assert_eq!(before_recs.len(), after_recs.len());
        for (before, after) in before_recs.iter().zip(after_recs.iter()) {
            assert_eq!(before.unit_id, after.unit_id);
            assert_eq!(before.reason, after.reason);
            assert_eq!(before.priority, after.priority);
        }
    }

    #[test]
    fn malformed_import_is_rejected_and_state_kept() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        store.track_unit_view("a", None);
        let user_id = store.record().user_id.clone();

        assert!(!store.import_progress("not json"));
        assert!(!store.import_progress(r#"{"userId": "u"}"#));
        assert!(!store.import_progress(r#"{"userId": "", "units": {}}"#));

        assert_eq!(store.record().user_id, user_id);
        assert!(store.has_viewed("a"));
    }

    #[test]
    fn reset_reinitializes_with_new_identity() {
        let (mut store, _clock) = store_with_clock(two_unit_curriculum());
        store.track_unit_view("a", None);
        let old_user = store.record().user_id.clone();

        store.reset_progress();
        assert_ne!(store.record().user_id, old_user);
        assert_eq!(store.viewed_unit_count(), 0);
        assert!(store.bookmarks().is_empty());
        assert_eq!(store.total_time_spent(), 0);
    }

    #[test]
    fn write_failures_never_surface_to_the_caller() {
        let mut store = ProgressStore::new(two_unit_curriculum(), Box::new(FailingStorage));
        store.track_unit_view("a", None);
        store.mark_unit_completed("a");
        let bookmark = store.add_bookmark("a", "Alpha", "/docs/a", None);

        // In-memory state stays authoritative despite every write failing.
        assert!(store.is_completed("a"));
        assert_eq!(store.bookmarks()[0].id, bookmark);
    }

    #[test]
    fn page_id_collapses_to_top_level_unit() {
        assert_eq!(unit_id_from_page_id("intro"), "intro");
        assert_eq!(
            unit_id_from_page_id("chapter-1-physical-ai/index"),
            "chapter-1-physical-ai"
        );
        assert_eq!(unit_id_from_page_id("chapter-3-ros2/nodes/topics"), "chapter-3-ros2");
    }
}
