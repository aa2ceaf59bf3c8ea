// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;
pub mod util;

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::NoteController;
use crate::cli::args::Args;
use crate::infrastructure::{HttpNoteStore, StoreWorker};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting jotter with arguments");

    // Initialize infrastructure
    let store = HttpNoteStore::new(&args.backend, Duration::from_secs(args.timeout))?;
    let (commands, replies, worker) = StoreWorker::spawn(store)?;

    // Initialize application and fetch the initial list
    let controller = NoteController::new(commands);
    controller.refresh();

    // Run the UI until quit; the controller (and its command sender) is
    // dropped inside, which lets the worker drain and exit.
    tui::run(controller, replies)?;

    worker.join()
}

#[cfg(test)]
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
