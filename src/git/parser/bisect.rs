//! Bisect transcript parser (git bisect run / git bisect log)

use super::super::constants::markers;
use super::{FIRST_BAD_COMMIT_REGEX, Parser, TraceError};

impl Parser {
    /// Extract the culprit revision from `git bisect log` output
    ///
    /// Scans line by line for the first bad commit marker and returns the
    /// revision between its brackets. A marker line with empty or missing
    /// brackets does not count.
    pub fn parse_first_bad_commit(log: &str) -> Result<String, TraceError> {
        log.lines()
            .filter(|line| line.contains(markers::FIRST_BAD_COMMIT))
            .find_map(|line| {
                FIRST_BAD_COMMIT_REGEX
                    .captures(line)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
            })
            .ok_or(TraceError::CulpritNotIdentified)
    }

    /// Check whether `git bisect run` output reports convergence
    ///
    /// git prints `<hash> is the first bad commit` (and, since 2.37,
    /// `bisect found first bad commit`) once the range narrowed to one revision.
    pub fn has_converged(run_output: &str) -> bool {
        run_output
            .lines()
            .any(|line| line.contains(markers::CONVERGED))
    }
}
