use std::sync::mpsc::{self, Receiver};

use jotter::application::{
    execute_command, CommandSender, NoteController, StoreCommand,
};
use jotter::util::testing::MockNoteStore;
use ratatui::buffer::Buffer;

/// Flatten a rendered test buffer into one string for containment asserts.
#[allow(dead_code)]
pub fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push('\n');
    }
    out
}

/// Test fixture wiring a controller to a mock store.
///
/// The harness plays the store worker's role synchronously: queued commands
/// sit in the channel until `step`/`pump` executes them, so tests control
/// exactly when each backend completion is observed.
#[allow(dead_code)]
pub struct ControllerHarness {
    pub controller: NoteController,
    pub store: MockNoteStore,
    commands: Receiver<StoreCommand>,
}

#[allow(dead_code)]
impl ControllerHarness {
    pub fn new(store: MockNoteStore) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            controller: NoteController::new(CommandSender::new(tx)),
            store,
            commands: rx,
        }
    }

    /// Execute at most one queued command and feed its reply back.
    /// Returns false when no command was queued.
    pub fn step(&mut self) -> bool {
        match self.commands.try_recv() {
            Ok(command) => {
                let reply = execute_command(&mut self.store, command);
                self.controller.handle_reply(reply);
                true
            }
            Err(_) => false,
        }
    }

    /// Run queued commands (including ones triggered by replies) until
    /// quiescent.
    pub fn pump(&mut self) {
        while self.step() {}
    }

    /// Refresh the list from the store and wait for it to land.
    pub fn refresh(&mut self) {
        self.controller.refresh();
        self.pump();
    }

    /// Select a note and wait for the fetch to land.
    pub fn select(&mut self, id: i64) {
        self.controller.select_note(id);
        self.pump();
    }
}
