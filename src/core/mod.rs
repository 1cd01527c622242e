//! core
//!
//! Configuration and the single-writer sync lock.

pub mod config;
pub mod lock;
