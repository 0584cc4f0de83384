use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Print the history of the head commit, newest first
    pub fn log(&self) -> Result<Vec<&Commit>, RepositoryError> {
        self.ensure_initialized()?;

        let history = self.graph().walk_to_root(self.head()).collect::<Vec<_>>();
        for commit in &history {
            self.show_commit(commit)?;
        }

        Ok(history)
    }

    /// Print every commit ever made, newest first
    pub fn global_log(&self) -> Result<Vec<&Commit>, RepositoryError> {
        self.ensure_initialized()?;

        let commits = self.graph().iter_newest_first().collect::<Vec<_>>();
        for commit in &commits {
            self.show_commit(commit)?;
        }

        Ok(commits)
    }

    /// Print the id of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> Result<Vec<CommitId>, RepositoryError> {
        self.ensure_initialized()?;

        let ids = self
            .graph()
            .iter()
            .filter(|commit| commit.message() == message)
            .map(Commit::id)
            .collect::<Vec<_>>();

        if ids.is_empty() {
            return Err(RepositoryError::NoSuchCommit);
        }

        let mut writer = self.writer();
        for id in &ids {
            writeln!(writer, "The id of the commit is: {}", id)?;
        }

        Ok(ids)
    }

    fn show_commit(&self, commit: &Commit) -> std::io::Result<()> {
        let mut writer = self.writer();

        writeln!(writer)?;
        writeln!(writer, "====")?;
        writeln!(writer, "Commit {}.", commit.id())?;
        writeln!(writer, "{}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())
    }
}
