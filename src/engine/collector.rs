//! engine::collector
//!
//! Invocation of the data-collection entry point.
//!
//! The collector is an opaque external collaborator: it produces or updates
//! files on disk as a side effect and signals failure via a non-zero exit
//! status. Its stdout and stderr pass through to the terminal untouched.
//! There is no retry, no timeout, and no output capture.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use crate::core::config::CollectorConfig;

/// Errors from running the collector.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The collector directory does not exist.
    #[error("collector directory not found: {path}")]
    MissingDir {
        /// The configured collector directory
        path: PathBuf,
    },

    /// The collector command could not be spawned.
    #[error("failed to run collector command '{command}': {source}")]
    SpawnFailed {
        /// The configured command
        command: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The collector exited with a non-zero status.
    #[error("collector command '{command}' failed{}", exit_suffix(.code))]
    Failed {
        /// The configured command
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => String::new(),
    }
}

/// Run the configured collector command in its project directory.
///
/// Blocks until the collector exits. Stdio is inherited, so the collector's
/// own output is what the user sees.
///
/// # Errors
///
/// - [`CollectorError::MissingDir`] if the collector directory does not exist
/// - [`CollectorError::SpawnFailed`] if the command cannot be started
/// - [`CollectorError::Failed`] on any non-zero exit
pub fn run_collector(config: &CollectorConfig) -> Result<(), CollectorError> {
    let dir = PathBuf::from(&config.dir);
    if !dir.is_dir() {
        return Err(CollectorError::MissingDir { path: dir });
    }

    let status = Command::new(&config.command)
        .args(&config.args)
        .current_dir(&dir)
        .status()
        .map_err(|e| CollectorError::SpawnFailed {
            command: config.command.clone(),
            source: e,
        })?;

    if !status.success() {
        return Err(CollectorError::Failed {
            command: config.command.clone(),
            code: status.code(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(dir: &std::path::Path, command: &str, args: &[&str]) -> CollectorConfig {
        CollectorConfig {
            dir: dir.to_string_lossy().into_owned(),
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn missing_directory_is_fatal() {
        let config = collector(std::path::Path::new("/nonexistent/statsync-test"), "true", &[]);
        let err = run_collector(&config).unwrap_err();
        assert!(matches!(err, CollectorError::MissingDir { .. }));
    }

    #[test]
    fn successful_collector_runs_in_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        // `sh -c` writes a file relative to the collector dir to prove cwd.
        let config = collector(dir.path(), "sh", &["-c", "echo ok > collected.txt"]);
        run_collector(&config).unwrap();
        assert!(dir.path().join("collected.txt").exists());
    }

    #[test]
    fn nonzero_exit_is_reported_with_code() {
        let dir = tempfile::tempdir().unwrap();
        let config = collector(dir.path(), "sh", &["-c", "exit 3"]);
        let err = run_collector(&config).unwrap_err();
        match err {
            CollectorError::Failed { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unspawnable_command_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = collector(dir.path(), "statsync-no-such-binary", &[]);
        let err = run_collector(&config).unwrap_err();
        assert!(matches!(err, CollectorError::SpawnFailed { .. }));
    }
}
