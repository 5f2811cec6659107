//! Integration tests for the foxgate binary.
//!
//! These tests run the compiled binary against real git repositories and
//! verify exit codes, output routing, and environment overrides.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Test fixture that creates a real git repository.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit on main.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);

        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file and commit it, returning the new HEAD as hex.
    fn commit_file(&self, path: &str, content: &str, message: &str) -> String {
        std::fs::write(self.dir.path().join(path), content).unwrap();
        run_git(self.path(), &["add", path]);
        run_git(self.path(), &["commit", "-m", message]);
        rev_parse(self.path(), "HEAD")
    }

    fn checkout(&self, name: &str) {
        run_git(self.path(), &["checkout", name]);
    }

    fn checkout_new(&self, name: &str) {
        run_git(self.path(), &["checkout", "-b", name]);
    }

    /// Set a local branch as the upstream of the current branch.
    fn set_upstream(&self, upstream: &str) {
        run_git(
            self.path(),
            &["branch", &format!("--set-upstream-to={}", upstream)],
        );
    }

    fn merge(&self, branch: &str, message: &str) {
        run_git(self.path(), &["merge", "--no-ff", branch, "-m", message]);
    }
}

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn rev_parse(dir: &Path, rev: &str) -> String {
    let output = std::process::Command::new("git")
        .args(["rev-parse", rev])
        .current_dir(dir)
        .output()
        .expect("git rev-parse failed");
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

/// Get a command for running foxgate.
fn foxgate() -> Command {
    Command::cargo_bin("foxgate").unwrap()
}

/// Linear history with an upstream-configured feature branch. Passes.
///
/// Returns the repo and the base tip hex.
fn passing_repo() -> (TestRepo, String) {
    let repo = TestRepo::new();
    let base_tip = repo.commit_file("a.txt", "a", "m2");
    repo.checkout_new("feature");
    repo.set_upstream("main");
    repo.commit_file("f1.txt", "f", "f1");
    (repo, base_tip)
}

/// Foxtrot shape: the base advanced, then got pulled in as a merge side
/// branch. Fails with the advanced tip as the offender.
fn foxtrot_repo() -> (TestRepo, String) {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "a", "m2");
    repo.checkout_new("feature");
    repo.set_upstream("main");
    repo.commit_file("f1.txt", "f", "f1");
    repo.checkout("main");
    let offending = repo.commit_file("b.txt", "b", "m3");
    repo.checkout("feature");
    repo.merge("main", "pull in main");
    (repo, offending)
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

#[test]
fn version_flag_works() {
    foxgate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("foxgate"));
}

#[test]
fn help_flag_works() {
    foxgate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("foxtrot"))
        .stdout(predicates::str::contains("FOXGATE_CWD"))
        .stdout(predicates::str::contains("FOXGATE_DEBUG"));
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn passing_check_exits_zero() {
    let (repo, _) = passing_repo();
    foxgate()
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "is contained in the first-parent history of HEAD",
        ));
}

#[test]
fn repo_without_remote_passes_vacuously() {
    let repo = TestRepo::new();
    foxgate()
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("'main'"));
}

#[test]
fn foxtrot_merge_exits_one() {
    let (repo, offending) = foxtrot_repo();
    foxgate()
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("foxtrot merge blocked"))
        .stderr(predicates::str::contains(&offending[..12]));
}

#[test]
fn failure_message_suggests_rebase() {
    let (repo, _) = foxtrot_repo();
    foxgate()
        .current_dir(repo.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("rebase onto 'main'"));
}

#[test]
fn outside_a_repository_exits_two() {
    let dir = TempDir::new().unwrap();
    foxgate()
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("error:"))
        .stderr(predicates::str::contains("not a git repository"));
}

#[test]
fn detached_head_without_remote_exits_two() {
    let repo = TestRepo::new();
    run_git(repo.path(), &["checkout", "--detach"]);
    foxgate()
        .current_dir(repo.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("error:"));
}

// =============================================================================
// Working Directory Override Tests
// =============================================================================

#[test]
fn cwd_flag_targets_another_repository() {
    let (repo, _) = passing_repo();
    let elsewhere = TempDir::new().unwrap();
    foxgate()
        .current_dir(elsewhere.path())
        .arg("--cwd")
        .arg(repo.path())
        .assert()
        .success();
}

#[test]
fn cwd_env_targets_another_repository() {
    let (repo, _) = passing_repo();
    let elsewhere = TempDir::new().unwrap();
    foxgate()
        .current_dir(elsewhere.path())
        .env("FOXGATE_CWD", repo.path())
        .assert()
        .success();
}

// =============================================================================
// Debug and Quiet Output Tests
// =============================================================================

#[test]
fn debug_flag_prints_resolution_details() {
    let (repo, base_tip) = passing_repo();
    foxgate()
        .current_dir(repo.path())
        .arg("--debug")
        .assert()
        .success()
        .stderr(predicates::str::contains(
            "[debug] base 'main' resolved from upstream",
        ))
        .stderr(predicates::str::contains(&base_tip[..12]));
}

#[test]
fn debug_env_enables_debug_output() {
    let (repo, _) = passing_repo();
    foxgate()
        .current_dir(repo.path())
        .env("FOXGATE_DEBUG", "1")
        .assert()
        .success()
        .stderr(predicates::str::contains("[debug]"));
}

#[test]
fn falsey_debug_env_is_ignored() {
    let (repo, _) = passing_repo();
    foxgate()
        .current_dir(repo.path())
        .env("FOXGATE_DEBUG", "0")
        .assert()
        .success()
        .stderr(predicates::str::contains("[debug]").not());
}

#[test]
fn debug_output_comes_before_the_verdict() {
    let (repo, _) = foxtrot_repo();
    let output = foxgate()
        .current_dir(repo.path())
        .arg("--debug")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let debug_at = stderr.find("[debug]").expect("debug line missing");
    let verdict_at = stderr
        .find("foxtrot merge blocked")
        .expect("verdict line missing");
    assert!(debug_at < verdict_at);
}

#[test]
fn quiet_wins_over_debug() {
    let (repo, _) = passing_repo();
    foxgate()
        .current_dir(repo.path())
        .arg("--quiet")
        .arg("--debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("[debug]").not());
}

#[test]
fn quiet_suppresses_pass_output() {
    let (repo, _) = passing_repo();
    foxgate()
        .current_dir(repo.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn quiet_keeps_failure_output() {
    let (repo, _) = foxtrot_repo();
    foxgate()
        .current_dir(repo.path())
        .arg("--quiet")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("foxtrot merge blocked"));
}
