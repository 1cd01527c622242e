//! engine::runner
//!
//! The sync sequence itself.
//!
//! # Design
//!
//! `run_sync` executes the fixed sequence with fail-fast semantics:
//!
//! 1. Run the collector in its project directory (fatal on non-zero exit)
//! 2. Open the data repository (fatal if missing or not a git repo)
//! 3. Acquire the sync lock (fatal if another run holds it)
//! 4. Stage all working-tree changes
//! 5. Check the staged diff against HEAD
//!    - non-empty: commit with the fixed message, force-push `HEAD` to the
//!      configured remote with hooks bypassed
//!    - empty: do nothing
//!
//! There is no retry and no cleanup. A push that fails after a successful
//! commit leaves the local repository committed and the remote
//! unsynchronized; the next run pushes the accumulated history.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::lock::SyncLock;
use crate::engine::collector::run_collector;
use crate::engine::Context;
use crate::git::Git;
use crate::ui::output::{self, Verbosity};

/// Result of a completed sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Staged changes existed; exactly one commit was created and pushed.
    Pushed,
    /// The staged diff was empty; nothing was committed or pushed.
    NoChanges,
}

/// Execute the full sync sequence.
///
/// Returns the outcome so callers can report it; intermediate progress goes
/// through [`crate::ui::output`] at the context's verbosity.
pub fn run_sync(ctx: &Context, config: &Config) -> Result<SyncOutcome> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    // Step 1: collector. Runs before the data repository is touched.
    output::debug(
        format!(
            "running collector: {} {:?} (in {})",
            config.collector.command, config.collector.args, config.collector.dir
        ),
        verbosity,
    );
    run_collector(&config.collector).context("collector step failed")?;

    // Step 2: open the data repository.
    let git = Git::open(Path::new(&config.repo.dir)).context("cannot open data repository")?;

    // Step 3: one mutating run at a time.
    let common_dir = git.common_dir().context("cannot locate git common dir")?;
    let _lock = SyncLock::acquire(&common_dir)?;

    // Step 4: stage everything; the repo's ignore rules are the only filter.
    git.stage_all().context("git add failed")?;

    // Step 5: commit and push only if the staged diff is non-empty.
    if !git.has_staged_changes().context("git diff check failed")? {
        return Ok(SyncOutcome::NoChanges);
    }

    git.commit(&config.repo.commit_message)
        .context("git commit failed")?;
    output::debug(
        format!("force-pushing HEAD to {}", config.repo.remote),
        verbosity,
    );
    git.push_force(&config.repo.remote)
        .context("git push failed")?;

    Ok(SyncOutcome::Pushed)
}
