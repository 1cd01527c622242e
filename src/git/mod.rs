//! git
//!
//! Single interface for all git operations.

pub mod interface;

pub use interface::{Git, GitError};
