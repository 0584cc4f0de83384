use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::confirm::Confirm;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{FileFailure, RepositoryError};

pub const RESET_WARNING: &str = "This operation will abort all the staged files and removed files";

#[derive(Debug, Default)]
pub struct ResetOutcome {
    pub failures: Vec<FileFailure>,
}

impl Repository {
    /// Move the head back to `target`, an earlier commit of the current branch
    ///
    /// Commits after `target` lose the current branch's tag but stay in the
    /// graph. The branch itself keeps pointing at its old head until the next
    /// commit moves it.
    ///
    /// Going further than a plain head move, a confirmed reset also empties
    /// the staging area, which is what the confirmation warning announces.
    /// Staged files stay in the working tree untracked. A declined prompt
    /// leaves the staging area and the head untouched.
    pub fn reset(
        &mut self,
        target: CommitId,
        confirm: &mut dyn Confirm,
    ) -> Result<ResetOutcome, RepositoryError> {
        self.ensure_initialized()?;

        let branch = self.state.current_branch.clone();
        let commit = self
            .graph()
            .get(target)
            .map_err(|_| RepositoryError::ResetTargetNotFound)?;
        if !self.graph().is_tagged(target, branch.as_ref()) {
            return Err(RepositoryError::NotOnCurrentBranch);
        }

        if !self.index().is_empty() && !confirm.confirm(RESET_WARNING)? {
            return Err(RepositoryError::Cancelled);
        }

        let pruned = commit
            .children()
            .iter()
            .copied()
            .filter(|child| self.graph().is_tagged(*child, branch.as_ref()))
            .collect::<Vec<_>>();
        let migration = Migration::plan(self.head_commit()?.manifest(), commit.manifest());

        for child in pruned {
            self.state
                .graph
                .untag_branch_recursive(child, branch.as_ref())?;
        }

        tracing::debug!(%target, branch = %branch, "resetting head");
        let failures = migration.apply(self.store.as_ref());

        self.state.head = target;
        // the warning promised to abort staged and removed files
        self.state.index.clear();
        self.report_failures(&failures)?;

        Ok(ResetOutcome { failures })
    }
}
