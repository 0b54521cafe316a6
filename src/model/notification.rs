//! Notification model
//!
//! The record handed to whoever delivers the news (mail, ticket, chat).
//! Delivery itself happens elsewhere.

use std::fmt;

use super::CommitMetadata;

/// A ready-to-send message addressed to the culprit's author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient address (the author email)
    pub recipient: String,
    /// Project the broken tests belong to
    pub project: String,
    /// The culprit commit
    pub commit: CommitMetadata,
}

impl Notification {
    /// Address a notification to the author of `commit`
    pub fn for_culprit(commit: CommitMetadata, project: impl Into<String>) -> Self {
        Self {
            recipient: commit.author_email.clone(),
            project: project.into(),
            commit,
        }
    }

    /// Render the human-readable message body
    pub fn render_body(&self) -> String {
        format!(
            "Dear {name},\n\
             you seem to have broken tests in the project {project} with your commit\n\
             \"{subject}\"\n\
             on {date}.\n\
             Btw the commit hash was {revision}.\n\
             Would you mind taking a look and fixing it?\n",
            name = self.commit.author_name,
            project = self.project,
            subject = self.commit.subject,
            date = self.commit.timestamp,
            revision = self.commit.revision,
        )
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "send to: {}", self.recipient)?;
        writeln!(f)?;
        f.write_str(&self.render_body())
    }
}
