//! git::interface
//!
//! Git interface implementation over the `git` CLI.
//!
//! This module is the **single doorway** to all git operations in statsync.
//! No other module spawns `git` directly. This keeps error handling
//! consistent and gives higher layers typed failure categories instead of
//! raw exit codes.
//!
//! # Design
//!
//! Mutating operations (`stage_all`, `commit`, `push_force`) inherit stdio,
//! so git's own progress and error output passes through to the terminal.
//! Read operations (`current_branch`, `is_worktree_dirty`) capture output.
//! `has_staged_changes` uses `git diff --cached --quiet` as a boolean oracle:
//! exit 0 means the index matches HEAD, exit 1 means staged changes exist.
//!
//! # Example
//!
//! ```ignore
//! use statsync::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("/data/repo"))?;
//! git.stage_all()?;
//! if git.has_staged_changes()? {
//!     git.commit("Update data")?;
//!     git.push_force("origin")?;
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The repository directory does not exist.
    #[error("repository directory not found: {path}")]
    MissingDir {
        /// The path that was checked
        path: PathBuf,
    },

    /// Not inside a git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// A git command exited with an unexpected non-zero status.
    #[error("git {command} failed{}", exit_suffix(.code))]
    CommandFailed {
        /// The git subcommand that failed
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },

    /// Git command output was not valid UTF-8.
    #[error("git {command} produced invalid UTF-8 output")]
    InvalidUtf8 {
        /// The git subcommand
        command: String,
    },

    /// Failed to spawn the git binary.
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => String::new(),
    }
}

/// The git interface for one repository.
///
/// Constructed via [`Git::open`], which validates that the directory exists
/// and is inside a git work tree. All operations run with the repository
/// root as the working directory.
#[derive(Debug)]
pub struct Git {
    /// Root of the repository's working tree.
    workdir: PathBuf,
}

impl Git {
    /// Open a git repository at the given path.
    ///
    /// # Errors
    ///
    /// - [`GitError::MissingDir`] if the directory does not exist
    /// - [`GitError::NotARepo`] if it is not inside a git work tree
    pub fn open(path: &Path) -> Result<Self, GitError> {
        if !path.is_dir() {
            return Err(GitError::MissingDir {
                path: path.to_path_buf(),
            });
        }

        let output = Command::new("git")
            .args(["rev-parse", "--is-inside-work-tree"])
            .current_dir(path)
            .output()?;

        if !output.status.success() || String::from_utf8_lossy(&output.stdout).trim() != "true" {
            return Err(GitError::NotARepo {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            workdir: path.to_path_buf(),
        })
    }

    /// Root of the repository's working tree, as configured.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The repository's common git directory (shared across worktrees).
    ///
    /// Used to place the sync lock.
    pub fn common_dir(&self) -> Result<PathBuf, GitError> {
        let dir = self.read_line(&["rev-parse", "--git-common-dir"])?;
        let dir = PathBuf::from(dir);
        // rev-parse may return a relative path; anchor it to the workdir.
        if dir.is_absolute() {
            Ok(dir)
        } else {
            Ok(self.workdir.join(dir))
        }
    }

    /// Stage all working-tree changes (`git add -A`).
    pub fn stage_all(&self) -> Result<(), GitError> {
        self.run_passthrough(&["add", "-A"])
    }

    /// Whether the index differs from HEAD.
    ///
    /// Runs `git diff --cached --quiet`: exit 0 means no staged changes,
    /// exit 1 means staged changes exist, anything else is an error.
    pub fn has_staged_changes(&self) -> Result<bool, GitError> {
        let status = Command::new("git")
            .args(["diff", "--cached", "--quiet"])
            .current_dir(&self.workdir)
            .status()?;

        match status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            code => Err(GitError::CommandFailed {
                command: "diff --cached --quiet".to_string(),
                code,
            }),
        }
    }

    /// Create a commit with the given message.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_passthrough(&["commit", "-m", message])
    }

    /// Force-push the current branch to the remote's matching ref.
    ///
    /// Runs `git push <remote> HEAD --no-verify --force`: pre-push hooks are
    /// bypassed and the remote ref is overwritten to match local history.
    pub fn push_force(&self, remote: &str) -> Result<(), GitError> {
        self.run_passthrough(&["push", remote, "HEAD", "--no-verify", "--force"])
    }

    /// Name of the currently checked-out branch, if any.
    ///
    /// Returns `None` on a detached HEAD.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let name = self.read_line(&["branch", "--show-current"])?;
        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name))
        }
    }

    /// Whether the working tree has any uncommitted changes.
    ///
    /// Uses `git status --porcelain`, which includes untracked files.
    pub fn is_worktree_dirty(&self) -> Result<bool, GitError> {
        let out = self.read_output(&["status", "--porcelain"])?;
        Ok(!out.trim().is_empty())
    }

    /// Run a mutating git command with inherited stdio.
    fn run_passthrough(&self, args: &[&str]) -> Result<(), GitError> {
        let status = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .status()?;

        if !status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                code: status.code(),
            });
        }

        Ok(())
    }

    /// Run a read-only git command and capture its stdout.
    fn read_output(&self, args: &[&str]) -> Result<String, GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                code: output.status.code(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8 {
            command: args.join(" "),
        })
    }

    /// Run a read-only git command and return its first line, trimmed.
    fn read_line(&self, args: &[&str]) -> Result<String, GitError> {
        let out = self.read_output(args)?;
        Ok(out.lines().next().unwrap_or("").trim().to_string())
    }
}
