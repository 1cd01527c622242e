//! cli::commands::run
//!
//! Run the collector, then commit and force-push the data repository.
//!
//! # Example
//!
//! ```bash
//! # Collect and publish (also the default with no subcommand)
//! statsync run
//!
//! # Same, with an explicit config file
//! statsync run --config ./statsync.toml
//! ```

use anyhow::Result;

use crate::core::config::Config;
use crate::engine::{run_sync, Context, SyncOutcome};
use crate::ui::output::{self, Verbosity};

/// Run the sync sequence and report the outcome.
pub fn run(ctx: &Context) -> Result<()> {
    let config = Config::load(ctx.config_path.as_deref())?;
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    match run_sync(ctx, &config)? {
        SyncOutcome::Pushed => output::success("Pushed changes.", verbosity),
        SyncOutcome::NoChanges => output::print("No changes to commit.", verbosity),
    }

    Ok(())
}
