//! cli::commands::init
//!
//! Write a starter config file to the canonical location
//! (`~/.statsync/config.toml`).

use anyhow::Result;

use crate::core::config::Config;
use crate::engine::Context;
use crate::ui::output::{self, Verbosity};

/// Write the starter config, refusing to overwrite without `force`.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let path = Config::write_starter(force)?;
    output::success(
        format!(
            "Wrote {}. Edit the collector and repo paths before running 'statsync run'.",
            path.display()
        ),
        verbosity,
    );
    Ok(())
}
