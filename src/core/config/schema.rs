//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the two directories and the
//! collector command must be non-empty. Unknown keys are rejected at parse
//! time so typos fail loudly instead of being silently ignored.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Statsync configuration.
///
/// # Example
///
/// ```toml
/// [collector]
/// dir = "/home/me/stat-collector"
/// command = "uv"
/// args = ["run", "collect"]
///
/// [repo]
/// dir = "/home/me/stat-data"
/// remote = "origin"
/// commit_message = "Update data"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The data-collection project.
    pub collector: CollectorConfig,

    /// The git repository the collector output lands in.
    pub repo: RepoConfig,
}

impl Config {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.collector.validate()?;
        self.repo.validate()
    }
}

/// Collector invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    /// Project directory the collector command runs in.
    pub dir: String,

    /// The collection entry point (a binary or task runner on PATH).
    pub command: String,

    /// Arguments passed to the command (default: none).
    #[serde(default)]
    pub args: Vec<String>,
}

impl CollectorConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "collector.dir must not be empty".to_string(),
            ));
        }
        if self.command.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "collector.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Data repository settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RepoConfig {
    /// Root of the data repository's working tree.
    pub dir: String,

    /// Remote to push to (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Fixed commit message (default: "Update data").
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl RepoConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "repo.dir must not be empty".to_string(),
            ));
        }
        if self.remote.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "repo.remote must not be empty".to_string(),
            ));
        }
        if self.commit_message.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "repo.commit_message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_commit_message() -> String {
    "Update data".to_string()
}
