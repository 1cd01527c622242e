//! Integration tests for the sync sequence.
//!
//! These tests exercise `run_sync` against real git repositories, with a
//! bare repository on the local filesystem standing in for the remote and
//! a shell one-liner standing in for the collector.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use statsync::core::config::{CollectorConfig, Config, RepoConfig};
use statsync::engine::{run_sync, Context, SyncOutcome};

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture: a collector directory, a data repository, and a bare
/// "remote" the data repository pushes to.
struct SyncFixture {
    root: TempDir,
    collector_dir: PathBuf,
    repo_dir: PathBuf,
    remote_dir: PathBuf,
}

impl SyncFixture {
    /// Create the three directories and push an initial commit to the remote.
    fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");

        let collector_dir = root.path().join("collector");
        let repo_dir = root.path().join("data-repo");
        let remote_dir = root.path().join("remote.git");
        std::fs::create_dir_all(&collector_dir).unwrap();
        std::fs::create_dir_all(&repo_dir).unwrap();

        run_git(root.path(), &["init", "--bare", "remote.git"]);
        run_git(
            &remote_dir,
            &["symbolic-ref", "HEAD", "refs/heads/main"],
        );

        run_git(&repo_dir, &["init", "-b", "main"]);
        run_git(&repo_dir, &["config", "user.email", "test@example.com"]);
        run_git(&repo_dir, &["config", "user.name", "Test User"]);
        run_git(
            &repo_dir,
            &["remote", "add", "origin", remote_dir.to_str().unwrap()],
        );

        std::fs::write(repo_dir.join("README.md"), "# data\n").unwrap();
        run_git(&repo_dir, &["add", "README.md"]);
        run_git(&repo_dir, &["commit", "-m", "Initial commit"]);
        run_git(&repo_dir, &["push", "origin", "HEAD"]);

        Self {
            root,
            collector_dir,
            repo_dir,
            remote_dir,
        }
    }

    /// Build a config whose collector runs the given shell snippet in the
    /// collector directory.
    fn config(&self, collector_script: &str) -> Config {
        Config {
            collector: CollectorConfig {
                dir: self.collector_dir.to_string_lossy().into_owned(),
                command: "sh".to_string(),
                args: vec!["-c".to_string(), collector_script.to_string()],
            },
            repo: RepoConfig {
                dir: self.repo_dir.to_string_lossy().into_owned(),
                remote: "origin".to_string(),
                commit_message: "Update data".to_string(),
            },
        }
    }

    /// A collector script that writes `contents` to `name` in the data repo.
    fn write_file_script(&self, name: &str, contents: &str) -> String {
        format!(
            "printf '%s' '{}' > '{}'",
            contents,
            self.repo_dir.join(name).display()
        )
    }

    fn context(&self) -> Context {
        Context {
            config_path: None,
            debug: false,
            quiet: true,
        }
    }

    /// HEAD OID of the data repository.
    fn local_head(&self) -> String {
        rev_parse(&self.repo_dir, "HEAD")
    }

    /// HEAD OID of the bare remote's main branch.
    fn remote_head(&self) -> String {
        rev_parse(&self.remote_dir, "main")
    }

    /// Number of commits on the data repository's current branch.
    fn commit_count(&self) -> usize {
        let output = Command::new("git")
            .args(["rev-list", "--count", "HEAD"])
            .current_dir(&self.repo_dir)
            .output()
            .expect("git rev-list failed");
        String::from_utf8(output.stdout)
            .unwrap()
            .trim()
            .parse()
            .unwrap()
    }

    /// Subject line of the latest commit in the data repository.
    fn last_commit_message(&self) -> String {
        let output = Command::new("git")
            .args(["log", "-1", "--format=%s"])
            .current_dir(&self.repo_dir)
            .output()
            .expect("git log failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory, asserting success.
fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn rev_parse(dir: &Path, rev: &str) -> String {
    let output = Command::new("git")
        .args(["rev-parse", rev])
        .current_dir(dir)
        .output()
        .expect("git rev-parse failed");
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn new_file_is_committed_and_pushed() {
    let fx = SyncFixture::new();
    let config = fx.config(&fx.write_file_script("data.json", "{\"games\": 1}"));

    let outcome = run_sync(&fx.context(), &config).unwrap();

    assert_eq!(outcome, SyncOutcome::Pushed);
    assert_eq!(fx.commit_count(), 2);
    assert_eq!(fx.last_commit_message(), "Update data");
    // The force-push landed: remote matches local exactly.
    assert_eq!(fx.remote_head(), fx.local_head());
}

#[test]
fn unchanged_output_is_a_no_op() {
    let fx = SyncFixture::new();
    let config = fx.config(&fx.write_file_script("data.json", "{\"games\": 1}"));

    assert_eq!(run_sync(&fx.context(), &config).unwrap(), SyncOutcome::Pushed);
    let head_after_first = fx.local_head();

    // Second run: collector produces byte-identical output.
    let outcome = run_sync(&fx.context(), &config).unwrap();

    assert_eq!(outcome, SyncOutcome::NoChanges);
    assert_eq!(fx.local_head(), head_after_first);
    assert_eq!(fx.remote_head(), head_after_first);
    assert_eq!(fx.commit_count(), 2);
}

#[test]
fn clean_tree_without_collector_output_is_a_no_op() {
    let fx = SyncFixture::new();
    // Collector succeeds but writes nothing.
    let config = fx.config("true");

    let outcome = run_sync(&fx.context(), &config).unwrap();

    assert_eq!(outcome, SyncOutcome::NoChanges);
    assert_eq!(fx.commit_count(), 1);
}

#[test]
fn removed_file_is_committed_and_pushed() {
    let fx = SyncFixture::new();
    let config = fx.config(&format!("rm '{}'", fx.repo_dir.join("README.md").display()));

    let outcome = run_sync(&fx.context(), &config).unwrap();

    assert_eq!(outcome, SyncOutcome::Pushed);
    assert_eq!(fx.commit_count(), 2);
    assert_eq!(fx.remote_head(), fx.local_head());
}

#[test]
fn collector_failure_halts_before_the_repo_is_touched() {
    let fx = SyncFixture::new();
    let head_before = fx.local_head();
    let config = fx.config("exit 7");

    let err = run_sync(&fx.context(), &config).unwrap_err();

    assert!(format!("{:#}", err).contains("exit code 7"));
    assert_eq!(fx.local_head(), head_before);
    assert_eq!(fx.remote_head(), head_before);
    assert_eq!(fx.commit_count(), 1);
}

#[test]
fn missing_collector_directory_is_fatal() {
    let fx = SyncFixture::new();
    let mut config = fx.config("true");
    config.collector.dir = fx.root.path().join("gone").to_string_lossy().into_owned();

    let err = run_sync(&fx.context(), &config).unwrap_err();
    assert!(format!("{:#}", err).contains("collector directory not found"));
}

#[test]
fn missing_repo_directory_is_fatal() {
    let fx = SyncFixture::new();
    let mut config = fx.config("true");
    config.repo.dir = fx.root.path().join("gone").to_string_lossy().into_owned();

    let err = run_sync(&fx.context(), &config).unwrap_err();
    assert!(format!("{:#}", err).contains("repository directory not found"));
}

#[test]
fn repo_dir_that_is_not_a_repo_is_fatal() {
    let fx = SyncFixture::new();
    let plain = fx.root.path().join("plain");
    std::fs::create_dir_all(&plain).unwrap();
    let mut config = fx.config("true");
    config.repo.dir = plain.to_string_lossy().into_owned();

    let err = run_sync(&fx.context(), &config).unwrap_err();
    assert!(format!("{:#}", err).contains("not a git repository"));
}

#[test]
fn force_push_overwrites_a_diverged_remote() {
    let fx = SyncFixture::new();

    // Diverge the remote: push a commit from a separate clone.
    let other = fx.root.path().join("other-clone");
    run_git(
        fx.root.path(),
        &["clone", fx.remote_dir.to_str().unwrap(), "other-clone"],
    );
    run_git(&other, &["config", "user.email", "other@example.com"]);
    run_git(&other, &["config", "user.name", "Other User"]);
    std::fs::write(other.join("drift.txt"), "drift\n").unwrap();
    run_git(&other, &["add", "drift.txt"]);
    run_git(&other, &["commit", "-m", "Remote drift"]);
    run_git(&other, &["push", "origin", "HEAD"]);
    assert_ne!(fx.remote_head(), fx.local_head());

    let config = fx.config(&fx.write_file_script("data.json", "{}"));
    let outcome = run_sync(&fx.context(), &config).unwrap();

    // The remote's divergent history was overwritten, not merged.
    assert_eq!(outcome, SyncOutcome::Pushed);
    assert_eq!(fx.remote_head(), fx.local_head());
}

#[test]
fn push_to_missing_remote_fails_after_commit() {
    let fx = SyncFixture::new();
    let mut config = fx.config(&fx.write_file_script("data.json", "{}"));
    config.repo.remote = "nowhere".to_string();

    let err = run_sync(&fx.context(), &config).unwrap_err();

    // Acknowledged gap: the commit sticks locally, the remote is untouched.
    assert!(format!("{:#}", err).contains("git push failed"));
    assert_eq!(fx.commit_count(), 2);
    assert_ne!(fx.remote_head(), fx.local_head());
}
