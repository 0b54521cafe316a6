//! git output parser
//!
//! Parses bisect transcripts and log records into structured data.

mod bisect;
mod metadata;


use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Regex for the culprit line of `git bisect log`
/// Format: `# first bad commit: [<revision>] <subject>`
/// Example: `# first bad commit: [3f2a9c1e...] fix bug`
///
/// The colon is optional; older transcripts omit it.
///
/// Groups:
/// 1. revision (everything between the brackets, no whitespace)
static FIRST_BAD_COMMIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#\s*first bad commit:?\s*\[([^\]\s]+)\]").expect("Invalid first bad commit regex")
});

/// Errors raised while reading bisect output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("bisect log has no first bad commit marker")]
    CulpritNotIdentified,

    #[error("Malformed commit metadata (expected {expected} fields, got {found}): {line:?}")]
    MalformedMetadata {
        expected: usize,
        found: usize,
        line: String,
    },
}

/// Parser for git command output
pub struct Parser;
