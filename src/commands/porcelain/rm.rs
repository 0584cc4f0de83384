use crate::areas::index::RemoveOutcome;
use crate::areas::repository::Repository;
use crate::areas::state::RepositoryState;
use crate::errors::RepositoryError;
use std::path::Path;

impl Repository {
    /// Unstage `path`, or mark it for removal in the next commit
    ///
    /// The working copy is left alone in both cases.
    pub fn remove(&mut self, path: &Path) -> Result<RemoveOutcome, RepositoryError> {
        self.ensure_initialized()?;
        let path = self.resolve_path(path)?;
        let path = path.as_path();

        if !self.store.exists(path) {
            return Err(RepositoryError::FileNotFound(path.to_path_buf()));
        }
        if self.store.is_dir(path) {
            return Err(RepositoryError::CannotRemoveDirectory);
        }

        let RepositoryState {
            graph, index, head, ..
        } = &mut self.state;
        let head_manifest = graph.get(*head)?.manifest();

        match index.remove(path, head_manifest) {
            RemoveOutcome::NothingToRemove => {
                Err(RepositoryError::NothingToRemove(path.to_path_buf()))
            }
            outcome => Ok(outcome),
        }
    }
}
