//! Scripted repository and oracle for in-process tests
//!
//! History is linear: `master~N` is N commits behind the tip. The oracle
//! passes at every offset at or beyond `passes_from`.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::git::{GitError, Repository};
use crate::model::RevisionRef;
use crate::oracle::{Oracle, OracleError, OracleReport, Verdict};

pub(crate) const CONVERGED_RUN: &str = "\
running '/opt/run_test.sh' 'GalaxyBTreeTest'
deadbeef is the first bad commit
commit deadbeef
Author: alice <alice@x.com>
";

pub(crate) const CONVERGED_LOG: &str = "\
git bisect start 'master' 'master~8'
# bad: [deadbeef] fix bug
git bisect bad deadbeef
# first bad commit: [deadbeef] fix bug
";

pub(crate) const METADATA: &str = "alice|alice@x.com|2024-01-01 10:00:00 -0800|fix bug\n";

/// Shared state between the fake repository and the fake oracle
#[derive(Debug)]
pub(crate) struct FakeState {
    pub head: String,
    pub calls: Vec<String>,
    /// Offsets the oracle was run at, in order
    pub checks: Vec<u32>,
    pub bisecting: bool,
    history_len: u32,
    passes_from: Option<u32>,
    run_result: Result<String, (i32, String)>,
    log: String,
    metadata: String,
    reset_fails: bool,
}

impl FakeState {
    fn head_offset(&self) -> u32 {
        RevisionRef::parse(&self.head).offset().unwrap_or(0)
    }
}

/// Builder for a fake repository/oracle pair
pub(crate) struct Scenario {
    state: FakeState,
}

impl Scenario {
    pub fn new() -> Self {
        Self {
            state: FakeState {
                head: "master".to_string(),
                calls: Vec::new(),
                checks: Vec::new(),
                bisecting: false,
                history_len: 10_000,
                passes_from: None,
                run_result: Ok(CONVERGED_RUN.to_string()),
                log: CONVERGED_LOG.to_string(),
                metadata: METADATA.to_string(),
                reset_fails: false,
            },
        }
    }

    /// Oracle passes at offsets >= `offset`
    pub fn passes_from(mut self, offset: u32) -> Self {
        self.state.passes_from = Some(offset);
        self
    }

    /// Oldest reachable offset
    pub fn history_len(mut self, len: u32) -> Self {
        self.state.history_len = len;
        self
    }

    pub fn run_fails(mut self, exit_code: i32, stderr: &str) -> Self {
        self.state.run_result = Err((exit_code, stderr.to_string()));
        self
    }

    pub fn run_output(mut self, output: &str) -> Self {
        self.state.run_result = Ok(output.to_string());
        self
    }

    pub fn bisect_log(mut self, log: &str) -> Self {
        self.state.log = log.to_string();
        self
    }

    pub fn metadata(mut self, metadata: &str) -> Self {
        self.state.metadata = metadata.to_string();
        self
    }

    pub fn failing_reset(mut self) -> Self {
        self.state.reset_fails = true;
        self
    }

    pub fn build(self) -> (FakeRepository, FakeOracle) {
        let state = Rc::new(RefCell::new(self.state));
        (
            FakeRepository {
                state: Rc::clone(&state),
            },
            FakeOracle { state },
        )
    }
}

pub(crate) struct FakeRepository {
    state: Rc<RefCell<FakeState>>,
}

impl FakeRepository {
    pub fn state(&self) -> Rc<RefCell<FakeState>> {
        Rc::clone(&self.state)
    }

    fn call(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl Repository for FakeRepository {
    fn workdir(&self) -> &Path {
        Path::new("/fake/repo")
    }

    fn checkout(&mut self, reference: &str) -> Result<String, GitError> {
        self.call(format!("checkout {reference}"));
        let mut state = self.state.borrow_mut();
        let offset = RevisionRef::parse(reference).offset().unwrap_or(0);
        if offset > state.history_len {
            return Err(GitError::UnknownRevision(reference.to_string()));
        }
        state.head = reference.to_string();
        Ok(String::new())
    }

    fn bisect_start(&mut self, bad: &str, good: &str) -> Result<String, GitError> {
        self.call(format!("bisect start {bad} {good}"));
        self.state.borrow_mut().bisecting = true;
        Ok("Bisecting: 3 revisions left to test after this (roughly 2 steps)\n".to_string())
    }

    fn bisect_run(&mut self, command: &[String]) -> Result<String, GitError> {
        self.call(format!("bisect run {}", command.join(" ")));
        match &self.state.borrow().run_result {
            Ok(output) => Ok(output.clone()),
            Err((exit_code, stderr)) => Err(GitError::CommandFailed {
                stderr: stderr.clone(),
                exit_code: *exit_code,
            }),
        }
    }

    fn bisect_log(&mut self) -> Result<String, GitError> {
        self.call("bisect log".to_string());
        Ok(self.state.borrow().log.clone())
    }

    fn bisect_reset(&mut self) -> Result<String, GitError> {
        self.call("bisect reset".to_string());
        let mut state = self.state.borrow_mut();
        state.bisecting = false;
        if state.reset_fails {
            return Err(GitError::CommandFailed {
                stderr: "fatal: reset failed".to_string(),
                exit_code: 128,
            });
        }
        Ok(String::new())
    }

    fn log_one(&mut self, revision: &str, _format: &str) -> Result<String, GitError> {
        self.call(format!("log {revision}"));
        Ok(self.state.borrow().metadata.clone())
    }
}

pub(crate) struct FakeOracle {
    state: Rc<RefCell<FakeState>>,
}

impl Oracle for FakeOracle {
    fn command_line(&self) -> Vec<String> {
        vec!["/opt/run_test.sh".to_string(), "GalaxyBTreeTest".to_string()]
    }

    fn check(&self, _working_dir: &Path) -> Result<OracleReport, OracleError> {
        let mut state = self.state.borrow_mut();
        let offset = state.head_offset();
        state.checks.push(offset);
        let passed = state.passes_from.is_some_and(|from| offset >= from);
        Ok(OracleReport {
            verdict: if passed { Verdict::Pass } else { Verdict::Fail },
            exit_code: Some(if passed { 0 } else { 1 }),
            output: String::new(),
        })
    }
}
