//! Run configuration
//!
//! Built by the binary from command-line flags and environment variables.
//! There are no configuration files.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Branch treated as the canonical checkout and the failing tip
pub const DEFAULT_BRANCH: &str = "master";

/// Largest backward offset the baseline search will check out
///
/// 987 is the 16th Fibonacci number.
pub const DEFAULT_STEP_CEILING: u32 = 987;

/// Test command used when none is given
pub const DEFAULT_TEST_COMMAND: &str = "./run_test.sh";

/// Smallest usable ceiling (the first offset tried is 2)
const MIN_STEP_CEILING: u32 = 2;

/// Errors in user-supplied configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("test command is empty")]
    EmptyCommand,

    #[error("test pattern is empty")]
    EmptyPattern,

    #[error("branch name is empty")]
    EmptyBranch,

    #[error("step ceiling {0} is below the first offset (2)")]
    CeilingTooLow(u32),
}

/// Everything a regression hunt needs to know up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntConfig {
    /// Repository root
    pub repo_path: PathBuf,
    /// Canonical branch; also the failing tip
    pub branch: String,
    /// Test command argv
    pub test_command: Vec<String>,
    /// Test-name pattern handed to the test command
    pub test_pattern: String,
    /// Project name used in the notification
    pub project: String,
    /// Fibonacci ceiling for the baseline search
    pub step_ceiling: u32,
    /// Known-good revision; skips the baseline search when set
    pub known_good: Option<String>,
}

impl HuntConfig {
    /// Configuration with defaults for everything but the pattern
    pub fn new(repo_path: impl Into<PathBuf>, test_pattern: impl Into<String>) -> Self {
        let repo_path = repo_path.into();
        let project = project_name(&repo_path);
        Self {
            repo_path,
            branch: DEFAULT_BRANCH.to_string(),
            test_command: vec![DEFAULT_TEST_COMMAND.to_string()],
            test_pattern: test_pattern.into(),
            project,
            step_ceiling: DEFAULT_STEP_CEILING,
            known_good: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.test_command.first().is_none_or(|p| p.is_empty()) {
            return Err(ConfigError::EmptyCommand);
        }
        if self.test_pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        if self.branch.is_empty() {
            return Err(ConfigError::EmptyBranch);
        }
        if self.step_ceiling < MIN_STEP_CEILING {
            return Err(ConfigError::CeilingTooLow(self.step_ceiling));
        }
        Ok(())
    }

    /// Make a path-like test program absolute
    ///
    /// The oracle runs in the repository root, both directly and under
    /// `git bisect run`; a program relative to the caller's directory would
    /// otherwise resolve differently. Bare names are left for PATH lookup.
    pub fn resolve_test_program(&mut self, cwd: &Path) {
        let Some(program) = self.test_command.first_mut() else {
            return;
        };
        if !program.contains(std::path::MAIN_SEPARATOR) && !program.contains('/') {
            return;
        }
        let candidate = cwd.join(&*program);
        if let Ok(absolute) = candidate.canonicalize() {
            *program = absolute.to_string_lossy().into_owned();
        }
    }
}

/// Default project name: the repository directory's name
fn project_name(repo_path: &Path) -> String {
    repo_path
        .canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(repo_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}
