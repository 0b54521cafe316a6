//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository with a linear history on `master`.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository whose current branch is `master`.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let repo = Self { dir };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/master"]);
        repo.git(&["config", "user.name", "Test Committer"]);
        repo.git(&["config", "user.email", "committer@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Execute a git command, returning Result instead of panicking.
    pub fn git_result(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(String::from_utf8_lossy(&output.stderr).into_owned())
        }
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Commit every change in the tree with the given author.
    pub fn commit(&self, message: &str, author: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "--allow-empty", "-m", message, "--author", author]);
    }

    /// Build a linear history of `count` commits.
    ///
    /// Commit `i` writes `counter.txt`. When `breaking` is `Some(i)`, commit
    /// `i` also adds a `BROKEN` marker file and is authored by Bob.
    pub fn linear_history(&self, count: usize, breaking: Option<usize>) {
        for i in 0..count {
            self.write_file("counter.txt", &format!("{i}\n"));
            if breaking == Some(i) {
                self.write_file("BROKEN", "tests fail from here on\n");
                self.commit("refactor storage layer", "Bob Builder <bob@example.com>");
            } else {
                self.commit(&format!("commit {i}"), "Alice <alice@example.com>");
            }
        }
    }

    /// Full hash of a revision.
    pub fn rev_parse(&self, rev: &str) -> String {
        self.git(&["rev-parse", rev]).trim().to_string()
    }

    /// Name of the checked-out branch ("HEAD" when detached).
    pub fn current_branch(&self) -> String {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
            .trim()
            .to_string()
    }

    /// Whether a bisect session is in progress.
    pub fn is_bisecting(&self) -> bool {
        self.git_result(&["bisect", "log"]).is_ok()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// A shell-script oracle kept outside the repository.
///
/// Passes while no `BROKEN` file exists in the working directory.
pub struct OracleScript {
    dir: TempDir,
}

impl OracleScript {
    pub fn new() -> Self {
        Self::with_body("echo \"running $1\"\ntest ! -f BROKEN\n")
    }

    /// An oracle whose exit status makes `git bisect run` abort.
    pub fn aborting() -> Self {
        Self::with_body("exit 255\n")
    }

    fn with_body(body: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(dir.path().join("run_test.sh"), format!("#!/bin/sh\n{body}"))
            .expect("Failed to write oracle script");
        Self { dir }
    }

    /// Test command argv (`sh <script>`).
    pub fn command(&self) -> Vec<String> {
        vec![
            "sh".to_string(),
            self.dir
                .path()
                .join("run_test.sh")
                .to_string_lossy()
                .into_owned(),
        ]
    }
}

impl Default for OracleScript {
    fn default() -> Self {
        Self::new()
    }
}
