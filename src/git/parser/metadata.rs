//! Commit metadata parser (git log -1 --pretty=format:...)

use super::super::template::{FIELD_SEPARATOR, METADATA_FIELDS};
use super::{Parser, TraceError};
use crate::model::CommitMetadata;

impl Parser {
    /// Parse the single-line output of the metadata query
    ///
    /// Format: `name|email|date|subject` (see [`Templates::commit_metadata`]).
    /// The output must hold exactly one non-empty line with exactly four
    /// fields. Fields are kept verbatim; only the line terminator is dropped.
    ///
    /// [`Templates::commit_metadata`]: super::super::Templates::commit_metadata
    pub fn parse_commit_metadata(
        revision: &str,
        output: &str,
    ) -> Result<CommitMetadata, TraceError> {
        let mut lines = output.lines().filter(|line| !line.is_empty());
        let record = match (lines.next(), lines.next()) {
            (Some(line), None) => line,
            (None, _) => {
                return Err(TraceError::MalformedMetadata {
                    expected: METADATA_FIELDS,
                    found: 0,
                    line: String::new(),
                });
            }
            (Some(_), Some(_)) => {
                return Err(TraceError::MalformedMetadata {
                    expected: METADATA_FIELDS,
                    found: output.split(FIELD_SEPARATOR).count(),
                    line: output.to_string(),
                });
            }
        };

        let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
        if fields.len() != METADATA_FIELDS {
            return Err(TraceError::MalformedMetadata {
                expected: METADATA_FIELDS,
                found: fields.len(),
                line: record.to_string(),
            });
        }

        Ok(CommitMetadata {
            revision: revision.to_string(),
            author_name: fields[0].to_string(),
            author_email: fields[1].to_string(),
            timestamp: fields[2].to_string(),
            subject: fields[3].to_string(),
        })
    }
}
