use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Manifest;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{FileAction, FileFailure, RepositoryError};
use chrono::Local;

/// Result of a successful `commit`
#[derive(Debug)]
pub struct CommitOutcome {
    pub id: CommitId,
    /// Files that could not be copied into the new commit's storage
    pub failures: Vec<FileFailure>,
}

impl Repository {
    /// Record the staged changes as a new commit on the current branch
    ///
    /// The new commit's storage gets a full copy of every tracked file:
    /// staged paths come from the working tree, everything else the head
    /// tracks (minus removals) is copied forward from the head's storage.
    /// A file that cannot be copied is reported and left out of the commit.
    pub fn commit(&mut self, message: &str) -> Result<CommitOutcome, RepositoryError> {
        self.ensure_initialized()?;

        if message.trim().is_empty() {
            return Err(RepositoryError::EmptyMessage);
        }
        if self.state.index.is_empty() {
            return Err(RepositoryError::NothingToCommit);
        }

        let id = self.state.graph.next_id();
        let head = self.head_commit()?;
        let index = &self.state.index;
        let store = self.store.as_ref();

        let mut manifest = Manifest::new();
        let mut failures = Vec::new();

        let carried_forward = head
            .manifest()
            .iter()
            .filter(|(path, _)| !index.is_staged(path) && !index.is_removed(path))
            .map(|(path, location)| (path.as_path(), location.as_path()));
        let staged = index.staged().map(|path| (path, path));

        for (path, src) in staged.chain(carried_forward) {
            match self.database.store_copy(store, id, path, src) {
                Ok(location) => {
                    manifest.insert(path.to_path_buf(), location);
                }
                Err(err) => failures.push(FileFailure::new(path, FileAction::Copy, err)),
            }
        }

        let parent = self.state.head;
        let id = self
            .state
            .graph
            .create_commit(
                parent,
                message.to_string(),
                manifest,
                Local::now().fixed_offset(),
            )?
            .id();
        self.state
            .graph
            .tag_branch(id, &self.state.current_branch)?;
        self.state
            .refs
            .retarget(self.state.current_branch.as_ref(), id)?;
        self.state.head = id;
        self.state.index.clear();

        tracing::info!(%id, %parent, branch = %self.state.current_branch, "committed");
        self.report_failures(&failures)?;

        Ok(CommitOutcome { id, failures })
    }
}
