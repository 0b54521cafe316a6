//! Bisection driver
//!
//! Runs `git bisect` between the baseline and the tip with the test oracle
//! as the step command.

use tracing::{info, warn};

use super::tree::WorkingTree;
use crate::error::HuntError;
use crate::git::{GitError, Parser, Repository};
use crate::model::RevisionRef;

/// Raw output of one bisect session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BisectTranscript {
    /// `git bisect start` output
    pub start_output: String,
    /// `git bisect run` output
    pub run_output: String,
    /// `git bisect log` output
    pub log: String,
}

/// Bisect `(good, bad]` using `step_command` to judge each revision
///
/// The tree is put on the canonical branch first, since git interprets the
/// range relative to the current checkout. The session is reset and the
/// branch checked out again on every exit path.
pub fn run_bisection<R: Repository>(
    tree: &mut WorkingTree<R>,
    bad: &RevisionRef,
    good: &RevisionRef,
    step_command: &[String],
) -> Result<BisectTranscript, HuntError> {
    tree.restore()?;

    let mut session = scopeguard::guard(tree, |tree| {
        if let Err(err) = tree.end_bisect() {
            warn!(%err, "failed to close bisect session");
        }
    });

    info!(%bad, %good, "starting bisect");
    let start_output = session
        .repo_mut()
        .bisect_start(&bad.to_string(), &good.to_string())?;

    let run_output = match session.repo_mut().bisect_run(step_command) {
        Ok(output) => output,
        Err(GitError::CommandFailed { stderr, exit_code }) => {
            return Err(HuntError::BisectionInconclusive {
                detail: format!("git bisect run exited with {exit_code}: {}", stderr.trim()),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if !Parser::has_converged(&run_output) {
        return Err(HuntError::BisectionInconclusive {
            detail: format!("no first bad commit between {good} and {bad}"),
        });
    }

    let log = session.repo_mut().bisect_log()?;

    Ok(BisectTranscript {
        start_output,
        run_output,
        log,
    })
}
