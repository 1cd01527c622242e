//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration
//! 2. Calls the engine (or the git interface, for read-only commands)
//! 3. Formats and displays output

mod completion;
mod init;
mod run;
mod status;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use init::init;
pub use run::run;
pub use status::status;

use crate::cli::args::Command;
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Run => run(ctx),
        Command::Status => status(ctx),
        Command::Init { force } => init(ctx, force),
        Command::Completion { shell } => completion(shell),
    }
}
