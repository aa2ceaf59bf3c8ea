// src/util/testing.rs

use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::collections::HashSet;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteStore, StoreCommand};
use crate::domain::{DomainError, Note};

/// Build a deterministic note for tests. The timestamp is derived from the
/// id so equality checks stay stable.
pub fn sample_note(id: i64, title: &str, body: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        body: body.to_string(),
        created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
    }
}

/// Shared mock store for testing everything that depends on NoteStore.
///
/// Holds notes in insertion order (standing in for the backend's ordering),
/// records every call for assertions, and can be configured to fail
/// individual operations.
///
/// # Examples
///
/// ```
/// use jotter::util::testing::{sample_note, MockNoteStore};
///
/// let store = MockNoteStore::builder()
///     .with_note(sample_note(1, "First", ""))
///     .with_update_title_failure(1)
///     .build();
/// ```
pub struct MockNoteStore {
    notes: Vec<Note>,
    next_id: i64,
    calls: Vec<StoreCommand>,
    fail_create: bool,
    fail_list: bool,
    fail_title_writes: HashSet<i64>,
    fail_body_writes: HashSet<i64>,
    fail_deletes: HashSet<i64>,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    /// Every call made so far, in order, as the command it corresponds to.
    pub fn calls(&self) -> &[StoreCommand] {
        &self.calls
    }

    /// Current backend-side state of a note, if it exists.
    pub fn stored_note(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Toggle list failures mid-test.
    pub fn set_list_failure(&mut self, fail: bool) {
        self.fail_list = fail;
    }

    fn find_mut(&mut self, id: i64) -> Result<&mut Note, DomainError> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(DomainError::NoteNotFound(id))
    }
}

impl NoteStore for MockNoteStore {
    fn create_note(&mut self, title: &str) -> Result<Note, DomainError> {
        self.calls.push(StoreCommand::CreateNote {
            title: title.to_string(),
        });
        if self.fail_create {
            return Err(DomainError::BackendError("create failed".to_string()));
        }
        let note = sample_note(self.next_id, title, "");
        self.next_id += 1;
        self.notes.push(note.clone());
        Ok(note)
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.calls.push(StoreCommand::ListNotes);
        if self.fail_list {
            return Err(DomainError::BackendError("list failed".to_string()));
        }
        Ok(self.notes.clone())
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.calls.push(StoreCommand::GetNote { id });
        self.notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn update_title(&mut self, id: i64, title: &str) -> Result<(), DomainError> {
        self.calls.push(StoreCommand::UpdateTitle {
            id,
            title: title.to_string(),
        });
        if self.fail_title_writes.contains(&id) {
            return Err(DomainError::BackendError("title write failed".to_string()));
        }
        self.find_mut(id)?.title = title.to_string();
        Ok(())
    }

    fn update_body(&mut self, id: i64, body: &str) -> Result<(), DomainError> {
        self.calls.push(StoreCommand::UpdateBody {
            id,
            body: body.to_string(),
        });
        if self.fail_body_writes.contains(&id) {
            return Err(DomainError::BackendError("body write failed".to_string()));
        }
        self.find_mut(id)?.body = body.to_string();
        Ok(())
    }

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        self.calls.push(StoreCommand::DeleteNote { id });
        if self.fail_deletes.contains(&id) {
            return Err(DomainError::BackendError("delete failed".to_string()));
        }
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return Err(DomainError::NoteNotFound(id));
        }
        Ok(())
    }
}

/// Builder for MockNoteStore
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteStoreBuilder {
    notes: Vec<Note>,
    fail_create: bool,
    fail_list: bool,
    fail_title_writes: HashSet<i64>,
    fail_body_writes: HashSet<i64>,
    fail_deletes: HashSet<i64>,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            fail_create: false,
            fail_list: false,
            fail_title_writes: HashSet::new(),
            fail_body_writes: HashSet::new(),
            fail_deletes: HashSet::new(),
        }
    }

    /// Seed a note the store starts out with
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make create_note fail
    pub fn with_create_failure(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Make list_notes fail
    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make update_title fail for a specific note id
    pub fn with_update_title_failure(mut self, id: i64) -> Self {
        self.fail_title_writes.insert(id);
        self
    }

    /// Make update_body fail for a specific note id
    pub fn with_update_body_failure(mut self, id: i64) -> Self {
        self.fail_body_writes.insert(id);
        self
    }

    /// Make delete_note fail for a specific note id
    pub fn with_delete_failure(mut self, id: i64) -> Self {
        self.fail_deletes.insert(id);
        self
    }

    pub fn build(self) -> MockNoteStore {
        let next_id = self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        MockNoteStore {
            notes: self.notes,
            next_id,
            calls: Vec::new(),
            fail_create: self.fail_create,
            fail_list: self.fail_list,
            fail_title_writes: self.fail_title_writes,
            fail_body_writes: self.fail_body_writes,
            fail_deletes: self.fail_deletes,
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_seeded_note_when_getting_then_returns_note() {
        let mut mock = MockNoteStore::builder()
            .with_note(sample_note(123, "Test", "Body"))
            .build();

        let result = mock.get_note(123).expect("Note should exist");
        assert_eq!(result.id, 123);
        assert_eq!(result.title, "Test");
    }

    #[test]
    fn given_no_note_when_getting_then_returns_error() {
        let mut mock = MockNoteStore::builder().build();

        let result = mock.get_note(999);
        assert!(matches!(result, Err(DomainError::NoteNotFound(999))));
    }

    #[test]
    fn given_create_when_listing_then_new_note_is_present() {
        let mut mock = MockNoteStore::builder()
            .with_note(sample_note(1, "First", ""))
            .build();

        let created = mock.create_note("New Note").expect("Create should succeed");
        let listed = mock.list_notes().expect("List should succeed");

        assert_eq!(created.id, 2);
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn given_title_failure_configured_when_updating_then_returns_error_and_keeps_old_title() {
        let mut mock = MockNoteStore::builder()
            .with_note(sample_note(1, "Old", ""))
            .with_update_title_failure(1)
            .build();

        let result = mock.update_title(1, "New");

        assert!(result.is_err());
        assert_eq!(mock.stored_note(1).expect("note exists").title, "Old");
    }

    #[test]
    fn given_calls_made_when_inspecting_then_all_are_recorded_in_order() {
        let mut mock = MockNoteStore::builder()
            .with_note(sample_note(1, "A", ""))
            .build();

        let _ = mock.list_notes();
        let _ = mock.get_note(1);
        let _ = mock.update_body(1, "text");

        assert_eq!(
            mock.calls(),
            &[
                StoreCommand::ListNotes,
                StoreCommand::GetNote { id: 1 },
                StoreCommand::UpdateBody {
                    id: 1,
                    body: "text".to_string()
                },
            ]
        );
    }

    #[test]
    fn given_delete_when_listing_then_note_is_gone() {
        let mut mock = MockNoteStore::builder()
            .with_note(sample_note(1, "A", ""))
            .with_note(sample_note(2, "B", ""))
            .build();

        mock.delete_note(1).expect("Delete should succeed");

        let listed = mock.list_notes().expect("List should succeed");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 2);
    }
}
