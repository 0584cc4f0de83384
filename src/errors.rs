//! Errors reported by repository operations
//!
//! [`RepositoryError`] covers everything an operator can cause: each variant
//! displays as the message printed for it. Problems with the repository
//! itself (an unreadable state file, a broken writer) travel as
//! [`anyhow::Error`] inside [`RepositoryError::Internal`].
//!
//! Operations that touch many files do not stop at the first I/O error.
//! Each failure becomes a [`FileFailure`] in the operation's outcome.

use crate::areas::commit_graph::GraphError;
use crate::areas::refs::RefsError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not in an initialized sprig directory.")]
    NotInitialized,
    #[error("A sprig repository has already been initialized")]
    AlreadyInitialized,
    #[error("File <{}> does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("Path <{}> is outside the repository", .0.display())]
    OutsideRepository(PathBuf),
    #[error("Path <{}> is inside the .sprig directory", .0.display())]
    InsideMetadata(PathBuf),
    #[error("Cannot add a directory")]
    CannotAddDirectory,
    #[error("Cannot remove a directory")]
    CannotRemoveDirectory,
    #[error("No reason to remove the file <{}>", .0.display())]
    NothingToRemove(PathBuf),
    #[error("No message associated with this commit, please enter a message")]
    EmptyMessage,
    #[error("No changes added to the commit")]
    NothingToCommit,
    #[error("File does not exist in the most recent commit, or no such branch exists")]
    NotInHeadCommit,
    #[error("File does not exist in this commit")]
    NotInCommit,
    #[error("No such commit exists")]
    ResetTargetNotFound,
    #[error("<{0}> is not a commit id")]
    InvalidCommitId(String),
    #[error("This commit is not from the current branch")]
    NotOnCurrentBranch,
    #[error("No such commit message exists")]
    NoSuchCommit,
    #[error("Cannot merge a branch with itself")]
    CannotMergeWithSelf,
    #[error("The branch is already up-to-date")]
    AlreadyUpToDate,
    #[error(
        "error: Your local changes to the following files will be overwritten by merge\n{}Please commit your changes or stash them before you can merge",
        list_paths(.0)
    )]
    UncommittedChanges(Vec<PathBuf>),
    #[error("Operation aborted")]
    Cancelled,
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Refs(#[from] RefsError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RepositoryError {
    /// Process exit code for this error
    ///
    /// Operator mistakes exit with 1, repository failures with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            RepositoryError::Internal(_) => 2,
            _ => 1,
        }
    }

    /// Operator mistakes are reported on stdout; everything else on stderr
    pub fn is_usage(&self) -> bool {
        !matches!(self, RepositoryError::Internal(_))
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Internal(err.into())
    }
}

// one path per line, each followed by a newline
fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("{}\n", path.display()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Read,
    Write,
    Copy,
    Delete,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            FileAction::Read => "read",
            FileAction::Write => "write",
            FileAction::Copy => "copy",
            FileAction::Delete => "delete",
        };
        write!(f, "{}", verb)
    }
}

/// A single file that could not be processed during a multi-file operation
#[derive(Debug, Error)]
#[error("Cannot {action} the file <{}>", .path.display())]
pub struct FileFailure {
    pub path: PathBuf,
    pub action: FileAction,
    #[source]
    pub source: std::io::Error,
}

impl FileFailure {
    pub fn new(path: impl Into<PathBuf>, action: FileAction, source: std::io::Error) -> Self {
        let failure = FileFailure {
            path: path.into(),
            action,
            source,
        };
        tracing::warn!(path = %failure.path.display(), action = %failure.action, error = %failure.source, "file operation failed");

        failure
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
