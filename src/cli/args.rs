// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Backend base URL
    #[arg(short, long, value_name = "URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend: String,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Write logs to this file instead of stderr (the terminal is taken over
    /// by the UI while running)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
