//! git command execution layer
//!
//! This module handles executing git commands and parsing their output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;
pub use parser::{Parser, TraceError};
pub use template::{FIELD_SEPARATOR, Templates};

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

/// The closed set of repository operations a regression hunt needs.
///
/// Every method maps to exactly one `git` invocation. A non-zero exit status
/// is always an error; callers decide whether it is fatal.
pub trait Repository {
    /// Directory the working tree lives in (also where the oracle runs)
    fn workdir(&self) -> &Path;

    /// `git checkout <reference>`
    fn checkout(&mut self, reference: &str) -> Result<String, GitError>;

    /// `git bisect start <bad> <good>`
    fn bisect_start(&mut self, bad: &str, good: &str) -> Result<String, GitError>;

    /// `git bisect run <command...>`
    fn bisect_run(&mut self, command: &[String]) -> Result<String, GitError>;

    /// `git bisect log`
    fn bisect_log(&mut self) -> Result<String, GitError>;

    /// `git bisect reset`
    fn bisect_reset(&mut self) -> Result<String, GitError>;

    /// `git log -1 --pretty=format:<format> <revision>`
    fn log_one(&mut self, revision: &str, format: &str) -> Result<String, GitError>;
}
