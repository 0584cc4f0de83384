use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;

impl Repository {
    /// Create branch `name` at the head commit
    ///
    /// The whole history of the head is tagged with the new branch, which is
    /// what the merge base lookup relies on later.
    pub fn branch(&mut self, name: &str) -> Result<(), RepositoryError> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(name)?;
        let head = self.state.head;

        self.state.refs.create(branch_name.clone(), head)?;
        self.state.graph.tag_chain(head, &branch_name)?;

        Ok(())
    }

    /// Delete branch `name` and scrub its tag from every commit
    ///
    /// Commits are never deleted, even when no branch reaches them anymore.
    pub fn rm_branch(&mut self, name: &str) -> Result<(), RepositoryError> {
        self.ensure_initialized()?;

        let target = self.state.refs.delete(name, &self.state.current_branch)?;
        self.state.graph.untag_everywhere(name);

        tracing::debug!(branch = name, %target, "deleted branch");

        Ok(())
    }
}
