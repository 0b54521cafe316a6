//! Single-owner handle on the checked-out working tree

use std::path::Path;

use tracing::debug;

use crate::git::{GitError, Repository};
use crate::model::RevisionRef;

/// The working tree of one repository, pinned to a canonical branch
///
/// Every checkout goes through `&mut self`, so only one step at a time can
/// move the tree. Whoever leaves it off the branch restores it with
/// [`WorkingTree::restore`] before handing it back.
#[derive(Debug)]
pub struct WorkingTree<R: Repository> {
    repo: R,
    branch: String,
}

impl<R: Repository> WorkingTree<R> {
    pub fn new(repo: R, branch: impl Into<String>) -> Self {
        Self {
            repo,
            branch: branch.into(),
        }
    }

    /// Canonical branch name
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// The branch tip, i.e. the failing revision
    pub fn tip(&self) -> RevisionRef {
        RevisionRef::tip(&self.branch)
    }

    pub fn workdir(&self) -> &Path {
        self.repo.workdir()
    }

    /// Move the tree to `revision`
    pub fn checkout(&mut self, revision: &RevisionRef) -> Result<(), GitError> {
        let output = self.repo.checkout(&revision.to_string())?;
        debug!(%revision, %output, "checked out");
        Ok(())
    }

    /// Put the tree back on the canonical branch
    pub fn restore(&mut self) -> Result<(), GitError> {
        self.repo.checkout(&self.branch)?;
        debug!(branch = %self.branch, "restored canonical branch");
        Ok(())
    }

    /// Close a bisect session and return to the canonical branch
    ///
    /// Both steps are attempted; the first error is returned.
    pub fn end_bisect(&mut self) -> Result<(), GitError> {
        let reset = self.repo.bisect_reset().map(|_| ());
        let restore = self.restore();
        reset.and(restore)
    }

    pub fn repo_mut(&mut self) -> &mut R {
        &mut self.repo
    }
}
