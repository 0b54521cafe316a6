//! Baseline search
//!
//! Walks backward from the failing tip with Fibonacci-sized offsets
//! (2, 3, 5, 8, ...) until the oracle passes.

use tracing::{debug, info};

use super::tree::WorkingTree;
use crate::error::HuntError;
use crate::git::{GitError, Repository};
use crate::model::{RevisionRef, SearchState};
use crate::oracle::{Oracle, Verdict};

/// Progress reported while the search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<'a> {
    /// About to check out and test `revision`
    Testing { revision: &'a RevisionRef },
    /// The oracle judged `revision`
    Judged {
        revision: &'a RevisionRef,
        verdict: Verdict,
    },
}

/// Nearest passing revision behind the tip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub revision: RevisionRef,
    /// Oracle runs it took, including the passing one
    pub iterations: u32,
}

/// Find the nearest prior revision that passes the oracle
///
/// Offsets above `ceiling` are never checked out; reaching one ends the
/// search with [`HuntError::SearchExhausted`], as does running off the start
/// of history. The tree is left wherever the last checkout put it.
pub fn find_baseline<R, O>(
    tree: &mut WorkingTree<R>,
    oracle: &O,
    ceiling: u32,
    mut on_event: impl FnMut(SearchEvent<'_>),
) -> Result<Baseline, HuntError>
where
    R: Repository,
    O: Oracle,
{
    let mut state = SearchState::new();
    let mut last_tested = 0;

    loop {
        let offset = state.advance();
        if offset > ceiling {
            return Err(HuntError::SearchExhausted {
                ceiling,
                last_offset: last_tested,
                reason: format!("no passing revision within {ceiling} revisions"),
            });
        }

        let revision = RevisionRef::behind(tree.branch(), offset);
        on_event(SearchEvent::Testing {
            revision: &revision,
        });

        match tree.checkout(&revision) {
            Ok(()) => {}
            Err(GitError::UnknownRevision(_)) => {
                return Err(HuntError::SearchExhausted {
                    ceiling,
                    last_offset: last_tested,
                    reason: format!("history ends before {revision}"),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let report = oracle.check(tree.workdir())?;
        debug!(%revision, output = %report.output, "oracle output");
        state.record(report.verdict.is_pass());
        last_tested = offset;

        on_event(SearchEvent::Judged {
            revision: &revision,
            verdict: report.verdict,
        });

        if state.passed {
            info!(%revision, iterations = state.iterations, "baseline found");
            return Ok(Baseline {
                revision,
                iterations: state.iterations,
            });
        }
    }
}
