//! Regression hunt
//!
//! Baseline search, then bisection, then culprit identification, all against
//! one working tree that is back on the canonical branch when the run ends.

mod baseline;
mod bisect;
mod culprit;
#[cfg(test)]
pub(crate) mod fake;
mod tree;

pub use baseline::{Baseline, SearchEvent, find_baseline};
pub use bisect::{BisectTranscript, run_bisection};
pub use culprit::identify_culprit;
pub use tree::WorkingTree;

use tracing::{info, warn};

use crate::config::HuntConfig;
use crate::error::HuntError;
use crate::git::Repository;
use crate::model::{CommitMetadata, Notification, RevisionRef};
use crate::oracle::{Oracle, Verdict};
use crate::report::StatusWriter;

/// Everything a successful hunt found out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntReport {
    /// Last revision that passed
    pub baseline: RevisionRef,
    /// Oracle runs spent finding the baseline (0 when it was given)
    pub search_iterations: u32,
    pub transcript: BisectTranscript,
    pub culprit: CommitMetadata,
    pub notification: Notification,
}

/// One regression hunt over a repository
pub struct Hunt<R: Repository, O: Oracle> {
    tree: WorkingTree<R>,
    oracle: O,
    config: HuntConfig,
    status: StatusWriter,
}

impl<R: Repository, O: Oracle> Hunt<R, O> {
    pub fn new(repo: R, oracle: O, config: HuntConfig) -> Self {
        Self {
            tree: WorkingTree::new(repo, config.branch.clone()),
            oracle,
            config,
            status: StatusWriter::default(),
        }
    }

    /// Send status blocks somewhere other than stdout
    pub fn with_status(mut self, status: StatusWriter) -> Self {
        self.status = status;
        self
    }

    /// Run both search phases and identify the culprit
    ///
    /// The canonical branch is checked out again before this returns,
    /// whatever the outcome.
    pub fn run(self) -> Result<HuntReport, HuntError> {
        let Hunt {
            tree,
            oracle,
            config,
            mut status,
        } = self;

        let mut tree = scopeguard::guard(tree, |mut tree| {
            if let Err(err) = tree.restore() {
                warn!(%err, "failed to restore canonical branch");
            }
        });

        let result = hunt(&mut *tree, &oracle, &config, &mut status);
        if let Err(err) = &result {
            status.block(&format!("{}: {err}", err.kind().label()));
        }
        result
    }
}

fn hunt<R: Repository, O: Oracle>(
    tree: &mut WorkingTree<R>,
    oracle: &O,
    config: &HuntConfig,
    status: &mut StatusWriter,
) -> Result<HuntReport, HuntError> {
    info!(
        branch = %config.branch,
        pattern = %config.test_pattern,
        "starting regression hunt"
    );
    let tip = tree.tip();

    tree.restore()?;
    status.block(&format!("revision under test is {tip}"));
    let verdict = oracle.check(tree.workdir())?.verdict;
    if verdict == Verdict::Pass {
        return Err(HuntError::TipPasses {
            tip: tip.to_string(),
        });
    }
    status.block(&format!("test in revision {tip} failed"));

    let (baseline, search_iterations) = match config.known_good.as_deref() {
        Some(good) => {
            status.block(&format!("using known good revision {good}"));
            (RevisionRef::parse(good), 0)
        }
        None => {
            let found = find_baseline(tree, oracle, config.step_ceiling, |event| match event {
                SearchEvent::Testing { revision } => {
                    status.block(&format!("revision under test is {revision}"));
                }
                SearchEvent::Judged { revision, verdict } => {
                    let outcome = match verdict {
                        Verdict::Pass => "passed",
                        Verdict::Fail => "failed",
                    };
                    status.block(&format!("test in revision {revision} {outcome}"));
                }
            })?;
            (found.revision, found.iterations)
        }
    };
    status.block(&format!("last good revision is : {baseline}"));

    let transcript = run_bisection(tree, &tip, &baseline, &oracle.command_line())?;
    status.block("bisect converged");
    status.transcript(&transcript.start_output);
    status.transcript(&transcript.run_output);
    status.transcript(&transcript.log);

    let culprit = identify_culprit(tree, &transcript)?;
    status.block(&format!("found first bad revision : {}", culprit.revision));
    status.block(&format!(
        "info about the checkin : {} {} {} {} {}",
        culprit.revision,
        culprit.author_name,
        culprit.author_email,
        culprit.timestamp,
        culprit.subject
    ));

    let notification = Notification::for_culprit(culprit.clone(), config.project.as_str());
    status.transcript(&notification.to_string());

    Ok(HuntReport {
        baseline,
        search_iterations,
        transcript,
        culprit,
        notification,
    })
}
