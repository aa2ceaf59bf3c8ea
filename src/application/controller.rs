// src/application/controller.rs
use tracing::{debug, warn};

use crate::application::store::{CommandSender, StoreCommand, StoreReply};
use crate::application::sync_tracker::{SyncStatus, SyncTracker};
use crate::application::write_queue::{WriteQueue, WriteRequest};
use crate::constants::DEFAULT_NOTE_TITLE;
use crate::domain::{DomainError, Note, NoteField};

/// Client-side note state and the operations the views drive.
///
/// Holds a transient mirror of the backend's list plus at most one selected
/// note. Edits mutate the mirror immediately (optimistic, no rollback) and
/// are persisted through the write queue, which keeps at most one request
/// per note in flight. The mirror is never authoritative: every create and
/// delete completion triggers a full refresh that rebuilds it.
pub struct NoteController {
    notes: Vec<Note>,
    selected: Option<Note>,
    sync: SyncTracker,
    writes: WriteQueue,
    commands: CommandSender,
}

impl NoteController {
    pub fn new(commands: CommandSender) -> Self {
        Self {
            notes: Vec::new(),
            selected: None,
            sync: SyncTracker::new(),
            writes: WriteQueue::new(),
            commands,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected(&self) -> Option<&Note> {
        self.selected.as_ref()
    }

    pub fn sync_status(&self, id: i64, field: NoteField) -> SyncStatus {
        self.sync.status(id, field)
    }

    /// Fetch the full list from the backend. The response replaces the local
    /// mirror wholesale; ordering is the backend's.
    pub fn refresh(&self) {
        self.commands.send(StoreCommand::ListNotes);
    }

    /// Create a note with the default title. The new note shows up via the
    /// refresh issued when the create completes; there is no optimistic
    /// insertion because the backend assigns id and timestamp.
    pub fn create_note(&self) {
        self.commands.send(StoreCommand::CreateNote {
            title: DEFAULT_NOTE_TITLE.to_string(),
        });
    }

    /// Fetch the full note and make it the selection once the reply arrives.
    pub fn select_note(&self, id: i64) {
        self.commands.send(StoreCommand::GetNote { id });
    }

    /// Apply a title edit: rewrite the list entry and the selected copy
    /// immediately, then schedule the backend write.
    pub fn update_title(&mut self, title: String) {
        let Some(selected) = self.selected.as_mut() else {
            return;
        };
        let id = selected.id;
        selected.title = title.clone();
        if let Some(entry) = self.notes.iter_mut().find(|n| n.id == id) {
            entry.title = title.clone();
        }
        self.schedule_write(id, NoteField::Title, title);
    }

    /// Apply a body edit. id, title and created_at are untouched; only the
    /// body changes locally before the write is scheduled.
    pub fn update_body(&mut self, body: String) {
        let Some(selected) = self.selected.as_mut() else {
            return;
        };
        let id = selected.id;
        selected.body = body.clone();
        self.schedule_write(id, NoteField::Body, body);
    }

    /// Clear the selection right away, then delete on the backend. The list
    /// is refreshed when the delete completes, whatever its outcome.
    pub fn delete_selected(&mut self) {
        let Some(selected) = self.selected.take() else {
            return;
        };
        debug!(note_id = selected.id, "Deleting selected note");
        self.commands.send(StoreCommand::DeleteNote { id: selected.id });
    }

    /// Feed one store completion back into local state.
    pub fn handle_reply(&mut self, reply: StoreReply) {
        match reply {
            StoreReply::Listed(Ok(notes)) => {
                debug!(count = notes.len(), "Refreshed note list");
                self.notes = notes;
                // The backend response is the new baseline.
                self.sync.clear();
            }
            StoreReply::Listed(Err(e)) => {
                warn!(error = %e, "Failed to refresh note list");
            }
            StoreReply::Created(Ok(note)) => {
                debug!(note_id = note.id, "Created note");
                self.refresh();
            }
            StoreReply::Created(Err(e)) => {
                warn!(error = %e, "Failed to create note");
            }
            StoreReply::Fetched { id, result } => match result {
                Ok(note) => {
                    debug!(note_id = note.id, "Selected note");
                    self.selected = Some(note);
                }
                Err(e) => {
                    // Keep whatever was selected before.
                    warn!(note_id = id, error = %e, "Failed to fetch note");
                }
            },
            StoreReply::TitleWritten { id, result } => {
                self.on_write_finished(id, NoteField::Title, result);
            }
            StoreReply::BodyWritten { id, result } => {
                self.on_write_finished(id, NoteField::Body, result);
            }
            StoreReply::Deleted { id, result } => {
                if let Err(e) = result {
                    warn!(note_id = id, error = %e, "Failed to delete note");
                }
                self.refresh();
            }
        }
    }

    fn schedule_write(&mut self, id: i64, field: NoteField, value: String) {
        self.sync.mark_pending(id, field);
        if let Some(request) = self.writes.push(id, field, value) {
            self.dispatch_write(request);
        }
    }

    fn dispatch_write(&self, request: WriteRequest) {
        let WriteRequest { id, field, value } = request;
        match field {
            NoteField::Title => self.commands.send(StoreCommand::UpdateTitle { id, title: value }),
            NoteField::Body => self.commands.send(StoreCommand::UpdateBody { id, body: value }),
        }
    }

    fn on_write_finished(&mut self, id: i64, field: NoteField, result: Result<(), DomainError>) {
        match result {
            // Only confirmed when no newer edit is queued behind this write.
            Ok(()) if !self.writes.has_queued(id, field) => {
                self.sync.mark_in_sync(id, field);
            }
            Ok(()) => {}
            Err(e) => {
                warn!(note_id = id, ?field, error = %e, "Field write failed");
                self.sync.mark_failed(id, field);
            }
        }
        if let Some(request) = self.writes.complete(id) {
            self.dispatch_write(request);
        }
    }
}
