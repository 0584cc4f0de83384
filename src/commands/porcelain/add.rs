use crate::areas::index::AddOutcome;
use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage `path` for the next commit
    ///
    /// Staging a tracked file whose content matches the head commit only
    /// cancels a pending removal of it.
    pub fn add(&mut self, path: &Path) -> Result<AddOutcome, RepositoryError> {
        self.ensure_initialized()?;
        let path = self.resolve_path(path)?;
        let path = path.as_path();

        if !self.store.exists(path) {
            return Err(RepositoryError::FileNotFound(path.to_path_buf()));
        }
        if self.store.is_dir(path) {
            return Err(RepositoryError::CannotAddDirectory);
        }

        let current = self
            .store
            .read(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        let snapshot = self
            .database
            .load(self.store.as_ref(), self.head_commit()?.location(path))
            .with_context(|| format!("Unable to read the committed copy of {}", path.display()))?;

        let outcome = self
            .state
            .index
            .add(path, &current, snapshot.as_deref());

        match outcome {
            AddOutcome::Staged => {}
            AddOutcome::AlreadyStaged => writeln!(
                self.writer(),
                "File <{}> has already been added",
                path.display()
            )?,
            AddOutcome::Unchanged => writeln!(
                self.writer(),
                "No changes for the file <{}> since the last commit",
                path.display()
            )?,
        }

        Ok(outcome)
    }
}
