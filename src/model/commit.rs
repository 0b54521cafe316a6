//! Commit metadata model

/// Authorship record of a single revision
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitMetadata {
    /// Revision identifier as reported by the bisect log
    pub revision: String,

    /// Author name
    pub author_name: String,

    /// Author email
    pub author_email: String,

    /// Author date (`2024-01-01 10:00:00 -0800`)
    pub timestamp: String,

    /// First line of the commit message
    pub subject: String,
}
