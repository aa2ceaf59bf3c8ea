// src/application/mod.rs
pub mod controller;
pub mod store;
pub mod sync_tracker;
pub mod write_queue;

pub use controller::NoteController;
pub use store::{execute_command, CommandSender, NoteStore, StoreCommand, StoreReply};
pub use sync_tracker::{SyncStatus, SyncTracker};
pub use write_queue::{WriteQueue, WriteRequest};
