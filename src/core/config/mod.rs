//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Statsync needs two directories it cannot guess: the collector project and
//! the data repository. Both live in a single TOML config file.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `--config <path>` if given
//! 2. `$STATSYNC_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/statsync/config.toml`
//! 4. `~/.statsync/config.toml` (canonical write location)
//!
//! A missing config file is a fatal error: unlike tools with sensible
//! defaults, statsync has nothing to run without the two paths.
//!
//! # Example
//!
//! ```toml
//! [collector]
//! dir = "/home/me/stat-collector"
//! command = "uv"
//! args = ["run", "collect"]
//!
//! [repo]
//! dir = "/home/me/stat-data"
//! remote = "origin"
//! commit_message = "Update data"
//! ```

pub mod schema;

pub use schema::{CollectorConfig, Config, RepoConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "STATSYNC_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no config file found (looked at --config, ${CONFIG_ENV_VAR}, \
         $XDG_CONFIG_HOME/statsync/config.toml, ~/.statsync/config.toml); \
         run 'statsync init' to create one"
    )]
    NotFound,

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("config file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error("home directory not found")]
    NoHomeDir,
}

impl Config {
    /// Load configuration, preferring an explicit path when given.
    ///
    /// # Errors
    ///
    /// Returns an error if no config file exists at any known location, or
    /// if the file cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::find_config_file()?,
        };

        let config = Self::read_config(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Locate the config file in the standard locations.
    fn find_config_file() -> Result<PathBuf, ConfigError> {
        // 1. $STATSYNC_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/statsync/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("statsync/config.toml");
            if path.exists() {
                return Ok(path);
            }
        }

        // 3. ~/.statsync/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".statsync/config.toml");
            if path.exists() {
                return Ok(path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.statsync/config.toml`.
    pub fn canonical_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".statsync/config.toml"))
    }

    /// Write a starter config file to the canonical location.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    /// Returns the path written.
    pub fn write_starter(force: bool) -> Result<PathBuf, ConfigError> {
        let path = Self::canonical_path()?;
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        write_atomic(&path, STARTER_CONFIG)?;
        Ok(path)
    }
}

/// Write a file atomically (write to temp file, then rename).
fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let to_write_err = |e: std::io::Error| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_write_err)?;
    }

    let tmp = path.with_extension("toml.tmp");
    let mut file = fs::File::create(&tmp).map_err(to_write_err)?;
    file.write_all(contents.as_bytes()).map_err(to_write_err)?;
    file.sync_all().map_err(to_write_err)?;
    fs::rename(&tmp, path).map_err(to_write_err)
}

/// Contents of the starter config written by `statsync init`.
const STARTER_CONFIG: &str = r#"# statsync configuration

[collector]
# Project directory the collector command runs in.
dir = "/path/to/collector"
# Entry point and arguments, e.g. command = "uv", args = ["run", "collect"].
command = "make"
args = ["collect"]

[repo]
# Git repository the collector output lands in.
dir = "/path/to/data-repo"
remote = "origin"
commit_message = "Update data"
"#;
