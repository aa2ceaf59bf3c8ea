// src/infrastructure/worker.rs
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::{execute_command, CommandSender, NoteStore, StoreReply};

/// Owns the thread that runs backend calls off the UI loop.
///
/// Commands flow in over one channel, one reply flows out per command. The
/// thread stops when every command sender is gone.
pub struct StoreWorker {
    thread: Option<JoinHandle<()>>,
}

impl StoreWorker {
    /// Move `store` onto a worker thread. Returns the command sender for the
    /// controller and the reply stream for the event loop.
    pub fn spawn<S>(mut store: S) -> Result<(CommandSender, Receiver<StoreReply>, Self)>
    where
        S: NoteStore + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();

        let thread = std::thread::Builder::new()
            .name("store-worker".to_string())
            .spawn(move || {
                while let Ok(command) = command_rx.recv() {
                    debug!(?command, "Executing store command");
                    let reply = execute_command(&mut store, command);
                    if reply_tx.send(reply).is_err() {
                        // Event loop is gone; nothing left to report to.
                        break;
                    }
                }
                debug!("Store worker stopped");
            })
            .context("Failed to spawn store worker thread")?;

        Ok((
            CommandSender::new(command_tx),
            reply_rx,
            Self {
                thread: Some(thread),
            },
        ))
    }

    /// Wait for the worker to drain. All command senders must be dropped
    /// first or this blocks forever.
    pub fn join(mut self) -> Result<()> {
        if let Some(thread) = self.thread.take() {
            thread
                .join()
                .map_err(|_| anyhow::anyhow!("Store worker thread panicked"))?;
        }
        Ok(())
    }
}
