//! core::lock
//!
//! Exclusive lock for sync runs.
//!
//! # Architecture
//!
//! The sync lock ensures only one statsync run can mutate the data
//! repository at a time. Two overlapping runs would race on the index:
//! one could commit files the other staged.
//!
//! The lock is repo-scoped: it lives at `<git common dir>/statsync/lock`,
//! shared across all worktrees of the repository.
//!
//! # Invariants
//!
//! - The lock is held from before staging until after the push
//! - The lock is automatically released on drop (RAII pattern)
//! - Lock acquisition is non-blocking (fails fast if locked)

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process already holds the lock.
    #[error("data repository is locked by another statsync run")]
    AlreadyLocked,

    /// Failed to create lock file or directory.
    #[error("failed to create lock: {0}")]
    CreateFailed(String),

    /// Failed to acquire the OS lock.
    #[error("failed to acquire lock: {0}")]
    AcquireFailed(String),
}

/// An exclusive lock on the data repository.
///
/// The lock is released when this guard is dropped, so it stays held even
/// if a later step panics.
#[derive(Debug)]
pub struct SyncLock {
    /// Path to the lock file.
    path: PathBuf,
    /// The open file handle with the lock held.
    /// When this is Some, we hold the lock.
    file: Option<File>,
}

impl SyncLock {
    /// Attempt to acquire the sync lock.
    ///
    /// This uses OS-level file locking via `fs2`, which works across
    /// processes. The lock is non-blocking - if another process holds
    /// the lock, this returns [`LockError::AlreadyLocked`] immediately.
    ///
    /// # Arguments
    ///
    /// * `common_dir` - The repository's common git directory
    ///
    /// # Errors
    ///
    /// - [`LockError::AlreadyLocked`] if another process holds the lock
    /// - [`LockError::CreateFailed`] if the lock file cannot be created
    /// - [`LockError::AcquireFailed`] if the OS lock cannot be acquired
    pub fn acquire(common_dir: &Path) -> Result<Self, LockError> {
        let lock_dir = common_dir.join("statsync");
        fs::create_dir_all(&lock_dir).map_err(|e| {
            LockError::CreateFailed(format!("cannot create {}: {}", lock_dir.display(), e))
        })?;

        let path = lock_dir.join("lock");

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| {
                LockError::CreateFailed(format!("cannot open {}: {}", path.display(), e))
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self {
                path,
                file: Some(file),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Err(LockError::AlreadyLocked),
            Err(e) => Err(LockError::AcquireFailed(e.to_string())),
        }
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SyncLock {
    fn drop(&mut self) {
        // Best-effort release on drop - ignore errors since we're dropping
        if let Some(file) = self.file.take() {
            let _ = file.unlock();
        }
    }
}
