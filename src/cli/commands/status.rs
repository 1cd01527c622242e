//! cli::commands::status
//!
//! Read-only view of the data repository: current branch and whether the
//! working tree has pending changes. Touches nothing - no staging, no lock.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::engine::Context;
use crate::git::Git;
use crate::ui::output::{self, Verbosity};

/// Show the data repository's branch and pending changes.
pub fn status(ctx: &Context) -> Result<()> {
    let config = Config::load(ctx.config_path.as_deref())?;
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let git = Git::open(Path::new(&config.repo.dir)).context("cannot open data repository")?;

    let branch = git
        .current_branch()?
        .unwrap_or_else(|| "(detached HEAD)".to_string());
    output::print(
        format!("{}: on {}", git.workdir().display(), branch),
        verbosity,
    );

    if git.is_worktree_dirty()? {
        output::print("Pending changes; 'statsync run' would commit and push.", verbosity);
    } else {
        output::print("Working tree clean; 'statsync run' would be a no-op.", verbosity);
    }

    Ok(())
}
