//! git log format definitions for stable output parsing
//!
//! These formats ensure consistent, parseable output from git commands
//! regardless of user configuration.

/// Separator used between fields in format output
///
/// Nothing escapes it: a `|` inside an author name or subject shifts the
/// field count and the record is rejected by the parser.
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields in a commit metadata record
pub const METADATA_FIELDS: usize = 4;

/// Formats for git commands
pub struct Templates;

impl Templates {
    /// Format for the culprit metadata query (`git log -1`)
    ///
    /// Fields (separated by `|`):
    /// 1. author name (mailmap-aware)
    /// 2. author email
    /// 3. author date, ISO 8601-like (`2024-01-01 10:00:00 -0800`)
    /// 4. subject line
    pub fn commit_metadata() -> &'static str {
        "%aN|%ae|%ai|%s"
    }
}
