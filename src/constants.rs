// src/constants.rs
//
// Application-wide constants extracted from magic values throughout the codebase.

/// Title given to a freshly created note before the user renames it.
///
/// Used in: `application/controller.rs`
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// Placeholder shown in the list view for notes whose title is empty.
///
/// Used in: `domain/note.rs`
pub const EMPTY_TITLE_PLACEHOLDER: &str = "(Empty title)";

/// How long the event loop waits for a terminal event before redrawing.
///
/// Store replies arriving while the loop is parked in `poll` are picked up
/// on the next tick, so this also bounds reply latency.
///
/// Used in: `tui/mod.rs`
pub const EVENT_POLL_INTERVAL_MS: u64 = 100;

/// Default backend base URL when `--backend` is not given.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8787";

/// Default HTTP request timeout in seconds when `--timeout` is not given.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
