// src/application/sync_tracker.rs
use std::collections::HashMap;

use crate::domain::NoteField;

/// Whether a locally edited field has been confirmed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    InSync,
    Pending,
    Failed,
}

/// Per-(note, field) sync flags for optimistic edits.
///
/// A field goes Pending when its write is scheduled, back to InSync when the
/// backend confirms the last scheduled value, and Failed when a write errors.
/// A full list refresh discards all flags along with the mirrored state.
#[derive(Debug, Default)]
pub struct SyncTracker {
    states: HashMap<(i64, NoteField), SyncStatus>,
}

impl SyncTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, id: i64, field: NoteField) -> SyncStatus {
        self.states.get(&(id, field)).copied().unwrap_or_default()
    }

    pub fn mark_pending(&mut self, id: i64, field: NoteField) {
        self.states.insert((id, field), SyncStatus::Pending);
    }

    pub fn mark_in_sync(&mut self, id: i64, field: NoteField) {
        self.states.remove(&(id, field));
    }

    pub fn mark_failed(&mut self, id: i64, field: NoteField) {
        self.states.insert((id, field), SyncStatus::Failed);
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}
