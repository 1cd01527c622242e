//! Statsync - publish collector output to a git data repository
//!
//! Statsync is a single-binary tool that runs a data-collection entry point
//! in one project directory, then stages, commits, and force-pushes whatever
//! changed in a second git repository. It replaces the ad-hoc shell script
//! most stat-collection setups grow around `git add -A && git push --force`.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates handlers)
//! - [`engine`] - Orchestrates the collect -> stage -> commit -> push sequence
//! - [`core`] - Configuration and the single-writer lock
//! - [`git`] - Single interface for all git operations
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Execution is fail-fast: the first non-zero subprocess exit aborts the run
//! 2. A commit and push happen if and only if the staged diff is non-empty
//! 3. Only one statsync run can mutate the data repository at a time

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod ui;
