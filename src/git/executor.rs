//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::constants::{self, commands, errors, flags};
use super::{GitError, Repository};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically adds `-c color.ui=never` and pins the message locale to
    /// `C` to ensure parseable output.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.arg(flags::CONFIG).arg(flags::NO_COLOR);
        cmd.args(args);
        cmd.envs(constants::env::MESSAGE_LOCALE.iter().copied());

        debug!(?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);
            debug!(exit_code, %stderr, "git failed");

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Check that `reference` names a commit
    ///
    /// `rev-parse --verify --quiet` exits 1 without output for a revision
    /// that does not resolve; other failures are passed through.
    pub fn resolves(&self, reference: &str) -> Result<bool, GitError> {
        let commit = format!("{reference}{}", flags::PEEL_COMMIT);
        match self.run(&[commands::REV_PARSE, flags::VERIFY, flags::QUIET, commit.as_str()]) {
            Ok(_) => Ok(true),
            Err(GitError::CommandFailed { exit_code: 1, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Repository for GitExecutor {
    fn workdir(&self) -> &Path {
        self.repo_path.as_deref().unwrap_or(Path::new("."))
    }

    fn checkout(&mut self, reference: &str) -> Result<String, GitError> {
        if !self.resolves(reference)? {
            return Err(GitError::UnknownRevision(reference.to_string()));
        }
        self.run(&[commands::CHECKOUT, flags::QUIET, reference])
            .map_err(|e| match e {
                GitError::CommandFailed { ref stderr, .. } if is_unknown_revision(stderr) => {
                    GitError::UnknownRevision(reference.to_string())
                }
                other => other,
            })
    }

    fn bisect_start(&mut self, bad: &str, good: &str) -> Result<String, GitError> {
        self.run(&[commands::BISECT, commands::bisect::START, bad, good])
    }

    fn bisect_run(&mut self, command: &[String]) -> Result<String, GitError> {
        let mut args = vec![commands::BISECT, commands::bisect::RUN];
        args.extend(command.iter().map(String::as_str));
        self.run(&args)
    }

    fn bisect_log(&mut self) -> Result<String, GitError> {
        self.run(&[commands::BISECT, commands::bisect::LOG])
    }

    fn bisect_reset(&mut self) -> Result<String, GitError> {
        self.run(&[commands::BISECT, commands::bisect::RESET])
    }

    fn log_one(&mut self, revision: &str, format: &str) -> Result<String, GitError> {
        let pretty = format!("{}{}", flags::PRETTY_FORMAT, format);
        self.run(&[commands::LOG, flags::SINGLE, pretty.as_str(), revision])
    }
}

/// Check git stderr for a revision that failed to resolve
fn is_unknown_revision(stderr: &str) -> bool {
    errors::UNKNOWN_REVISION
        .iter()
        .any(|pattern| stderr.contains(pattern))
}
