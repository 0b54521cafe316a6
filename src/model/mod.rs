//! Data models for culprit
//!
//! Plain data structures shared by the search phases: revision references,
//! search state, commit metadata and the outgoing notification.

mod commit;
mod notification;
mod revision;
mod search;

pub use commit::CommitMetadata;
pub use notification::Notification;
pub use revision::RevisionRef;
pub use search::SearchState;
