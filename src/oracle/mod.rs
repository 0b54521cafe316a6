//! Test oracle
//!
//! Runs the test command against the working tree and turns its exit status
//! into a pass/fail verdict. The same command line is handed to
//! `git bisect run`, so both search phases judge revisions identically.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Placeholder replaced by the test-name pattern inside command arguments
pub const PATTERN_PLACEHOLDER: &str = "{test}";

/// Errors that can occur when invoking the test command
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Test command is empty")]
    EmptyCommand,

    #[error("Test command not found: {0}")]
    ProgramNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Outcome of one oracle run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        self == Self::Pass
    }
}

/// Exit status and captured output of one oracle run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleReport {
    pub verdict: Verdict,
    /// Exit code (None when killed by a signal)
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr
    pub output: String,
}

/// A pass/fail judge for the current working tree
pub trait Oracle {
    /// Command line `git bisect run` executes for each step
    fn command_line(&self) -> Vec<String>;

    /// Run the tests in `working_dir` and report the verdict
    fn check(&self, working_dir: &Path) -> Result<OracleReport, OracleError>;
}

/// External test command, e.g. `./run_test.sh GalaxyBTreeTest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    program: String,
    args: Vec<String>,
    pattern: String,
}

impl TestCommand {
    /// Build from an argv and a test-name pattern
    ///
    /// Arguments containing `{test}` get the pattern substituted; when none
    /// do, the pattern is appended as the last argument.
    pub fn new(argv: Vec<String>, pattern: impl Into<String>) -> Result<Self, OracleError> {
        let mut argv = argv.into_iter();
        let program = argv.next().ok_or(OracleError::EmptyCommand)?;
        if program.is_empty() {
            return Err(OracleError::EmptyCommand);
        }
        Ok(Self {
            program,
            args: argv.collect(),
            pattern: pattern.into(),
        })
    }
}

impl Oracle for TestCommand {
    fn command_line(&self) -> Vec<String> {
        let mut line = vec![self.program.clone()];
        let substituted = self.args.iter().any(|a| a.contains(PATTERN_PLACEHOLDER));
        line.extend(
            self.args
                .iter()
                .map(|a| a.replace(PATTERN_PLACEHOLDER, &self.pattern)),
        );
        if !substituted {
            line.push(self.pattern.clone());
        }
        line
    }

    fn check(&self, working_dir: &Path) -> Result<OracleReport, OracleError> {
        let line = self.command_line();
        debug!(command = ?line, dir = %working_dir.display(), "running test oracle");

        let output = Command::new(&line[0])
            .args(&line[1..])
            .current_dir(working_dir)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    OracleError::ProgramNotFound(self.program.clone())
                } else {
                    OracleError::IoError(e)
                }
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let verdict = if output.status.success() {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        debug!(?verdict, exit_code = ?output.status.code(), "test oracle finished");

        Ok(OracleReport {
            verdict,
            exit_code: output.status.code(),
            output: text,
        })
    }
}
