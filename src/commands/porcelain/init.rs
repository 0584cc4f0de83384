use crate::areas::repository::Repository;
use crate::areas::state::RepositoryState;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use anyhow::Context;
use chrono::Local;
use std::io::Write;

impl Repository {
    /// Create `.sprig` with the root commit on `master`
    ///
    /// Refused whenever `.sprig` already exists, even if its state file
    /// could not be read.
    pub fn init(&mut self) -> Result<(), RepositoryError> {
        if self.is_initialized() || self.store.exists(self.database.path()) {
            return Err(RepositoryError::AlreadyInitialized);
        }

        let root_dir = self.database.commit_dir(CommitId::ROOT);
        self.store
            .create_dir(&root_dir)
            .with_context(|| format!("Failed to create {}", root_dir.display()))?;

        let state = RepositoryState::initial(Local::now().fixed_offset())?;
        self.set_initialized(state);

        writeln!(
            self.writer(),
            "Initialized empty sprig repository in {}",
            self.path().join(self.database.path()).display()
        )?;

        Ok(())
    }
}
