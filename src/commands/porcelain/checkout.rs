use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{FileAction, FileFailure, RepositoryError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What `checkout` was asked to restore, decided by its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// No argument: switch to the default branch
    DefaultBranch,
    /// One argument: a branch if one has that name, otherwise a file
    BranchOrFile(String),
    /// Two arguments: a file as of a given commit
    FileAt { commit: CommitId, path: PathBuf },
}

#[derive(Debug, Default)]
pub struct CheckoutOutcome {
    /// Whether the current branch changed
    pub switched: bool,
    pub failures: Vec<FileFailure>,
}

impl Repository {
    pub fn checkout(&mut self, target: CheckoutTarget) -> Result<CheckoutOutcome, RepositoryError> {
        match target {
            CheckoutTarget::DefaultBranch => self.checkout_branch(DEFAULT_BRANCH),
            CheckoutTarget::BranchOrFile(name) if self.refs().contains(&name) => {
                self.checkout_branch(&name)
            }
            CheckoutTarget::BranchOrFile(path) => self.checkout_file(Path::new(&path)),
            CheckoutTarget::FileAt { commit, path } => self.checkout_file_at(commit, &path),
        }
    }

    /// Restore the working copy of `path` from the head commit
    pub fn checkout_file(&mut self, path: &Path) -> Result<CheckoutOutcome, RepositoryError> {
        self.ensure_initialized()?;
        let path = self.resolve_path(path)?;
        let path = path.as_path();

        let location = self
            .head_commit()?
            .location(path)
            .ok_or(RepositoryError::NotInHeadCommit)?
            .to_path_buf();

        self.restore_file(&location, path)
    }

    /// Restore the working copy of `path` from commit `id`
    pub fn checkout_file_at(
        &mut self,
        id: CommitId,
        path: &Path,
    ) -> Result<CheckoutOutcome, RepositoryError> {
        self.ensure_initialized()?;
        let path = self.resolve_path(path)?;
        let path = path.as_path();

        let location = self
            .graph()
            .get(id)?
            .location(path)
            .ok_or(RepositoryError::NotInCommit)?
            .to_path_buf();

        self.restore_file(&location, path)
    }

    /// Switch to branch `name`, rewriting the working tree to its head
    ///
    /// Staged changes are kept as they are.
    pub fn checkout_branch(&mut self, name: &str) -> Result<CheckoutOutcome, RepositoryError> {
        self.ensure_initialized()?;

        let branch = self.state.refs.resolve(name)?;
        if self.state.current_branch == branch {
            writeln!(self.writer(), "Already in branch <{}>", branch)?;
            return Ok(CheckoutOutcome::default());
        }

        let target = self.state.refs.lookup(name)?;
        let migration = Migration::plan(
            self.head_commit()?.manifest(),
            self.graph().get(target)?.manifest(),
        );
        tracing::debug!(branch = %branch, %target, actions = migration.actions().len(), "switching branch");
        let failures = migration.apply(self.store.as_ref());

        self.state.head = target;
        self.state.current_branch = branch;

        self.report_failures(&failures)?;
        writeln!(self.writer(), "Switched to branch <{}>", name)?;

        Ok(CheckoutOutcome {
            switched: true,
            failures,
        })
    }

    fn restore_file(
        &mut self,
        location: &Path,
        path: &Path,
    ) -> Result<CheckoutOutcome, RepositoryError> {
        let failures = match self.store.copy(location, path) {
            Ok(()) => Vec::new(),
            Err(err) => vec![FileFailure::new(path, FileAction::Copy, err)],
        };
        self.report_failures(&failures)?;

        Ok(CheckoutOutcome {
            switched: false,
            failures,
        })
    }
}
