//! Culprit identification from a converged bisect transcript

use tracing::info;

use super::bisect::BisectTranscript;
use super::tree::WorkingTree;
use crate::error::HuntError;
use crate::git::{Parser, Repository, Templates};
use crate::model::CommitMetadata;

/// Read the first bad commit from the bisect log and fetch its metadata
pub fn identify_culprit<R: Repository>(
    tree: &mut WorkingTree<R>,
    transcript: &BisectTranscript,
) -> Result<CommitMetadata, HuntError> {
    let revision = Parser::parse_first_bad_commit(&transcript.log)?;
    info!(%revision, "first bad commit");

    let record = tree
        .repo_mut()
        .log_one(&revision, Templates::commit_metadata())?;
    Ok(Parser::parse_commit_metadata(&revision, &record)?)
}
