// src/application/store.rs
use std::sync::mpsc::Sender;

use tracing::warn;

use crate::domain::{DomainError, Note};

/// Backend note store as seen by the application layer. The backend owns
/// the durable records; implementations only relay calls to it.
pub trait NoteStore {
    fn create_note(&mut self, title: &str) -> Result<Note, DomainError>;

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    fn update_title(&mut self, id: i64, title: &str) -> Result<(), DomainError>;

    fn update_body(&mut self, id: i64, body: &str) -> Result<(), DomainError>;

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError>;
}

/// One backend call, as queued from the event loop to the store worker.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    CreateNote { title: String },
    ListNotes,
    GetNote { id: i64 },
    UpdateTitle { id: i64, title: String },
    UpdateBody { id: i64, body: String },
    DeleteNote { id: i64 },
}

/// Completion of one backend call, posted back to the event loop.
///
/// Every command produces exactly one reply; failure results are carried
/// rather than dropped so the controller can log and mark sync state.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreReply {
    Created(Result<Note, DomainError>),
    Listed(Result<Vec<Note>, DomainError>),
    Fetched { id: i64, result: Result<Note, DomainError> },
    TitleWritten { id: i64, result: Result<(), DomainError> },
    BodyWritten { id: i64, result: Result<(), DomainError> },
    Deleted { id: i64, result: Result<(), DomainError> },
}

/// Run one command against a store and produce its reply.
///
/// The worker thread and the test harness both dispatch through this, so
/// tests exercise the exact mapping the application uses at runtime.
pub fn execute_command<S: NoteStore>(store: &mut S, command: StoreCommand) -> StoreReply {
    match command {
        StoreCommand::CreateNote { title } => StoreReply::Created(store.create_note(&title)),
        StoreCommand::ListNotes => StoreReply::Listed(store.list_notes()),
        StoreCommand::GetNote { id } => StoreReply::Fetched {
            id,
            result: store.get_note(id),
        },
        StoreCommand::UpdateTitle { id, title } => StoreReply::TitleWritten {
            id,
            result: store.update_title(id, &title),
        },
        StoreCommand::UpdateBody { id, body } => StoreReply::BodyWritten {
            id,
            result: store.update_body(id, &body),
        },
        StoreCommand::DeleteNote { id } => StoreReply::Deleted {
            id,
            result: store.delete_note(id),
        },
    }
}

/// Sending half of the command channel, held by the controller.
#[derive(Debug, Clone)]
pub struct CommandSender {
    inner: Sender<StoreCommand>,
}

impl CommandSender {
    pub fn new(inner: Sender<StoreCommand>) -> Self {
        Self { inner }
    }

    /// Queue a command for the store worker. A closed channel only happens
    /// during shutdown, so the failure is logged and swallowed.
    pub fn send(&self, command: StoreCommand) {
        if self.inner.send(command).is_err() {
            warn!("Store worker is gone, dropping command");
        }
    }
}
