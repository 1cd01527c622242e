//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of the default locations
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Statsync - publish collector output to a git data repository
#[derive(Parser, Debug)]
#[command(name = "statsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the collector, then commit and force-push the data repository
    #[command(
        name = "run",
        long_about = "Run the collector, then commit and force-push the data repository.\n\n\
            Executes the configured data-collection command in the collector \
            directory, stages everything that changed in the data repository, \
            and - only if the staged diff is non-empty - creates a commit and \
            force-pushes the current branch to the configured remote.\n\n\
            This is the default when statsync is invoked with no subcommand. \
            Execution is fail-fast: the first failing step aborts the run."
    )]
    Run,

    /// Show the data repository's branch and pending changes (read-only)
    Status,

    /// Write a starter config file to the canonical location
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
