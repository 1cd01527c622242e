//! engine
//!
//! Orchestrates the sync sequence: collect -> stage -> check -> commit -> push.
//!
//! # Architecture
//!
//! The engine is the central coordinator for the `run` command. Every run
//! follows the same fixed sequence, aborting on the first failing step:
//!
//! ```text
//! collect -> lock -> stage -> staged-diff check -> [commit -> push]
//! ```
//!
//! The bracketed steps execute only when the staged diff is non-empty.
//! The engine never retries, never cleans up partial state, and never
//! reorders steps.
//!
//! # Invariants
//!
//! - A collector failure halts the run before the data repository is touched
//! - A commit and push happen if and only if the staged diff is non-empty
//! - The sync lock is held for the whole mutating portion of the run

pub mod collector;
pub mod runner;

pub use runner::{run_sync, SyncOutcome};

use std::path::PathBuf;

/// Execution context passed from the CLI layer to command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Config file override from `--config`.
    pub config_path: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}
