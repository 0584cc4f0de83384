//! Staging area
//!
//! Tracks the changes that the next commit will record, relative to the
//! head commit:
//!
//! - `staged`: paths whose working-tree content will be copied into the next
//!   commit (new files and modified tracked files)
//! - `removed`: tracked paths the next commit will stop tracking
//!
//! A path is never in both sets once an operation returns. Both sets keep
//! insertion order, which only matters for `status` output.

use crate::artifacts::objects::commit::Manifest;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result of staging a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Staged,
    /// An untracked path that was already staged
    AlreadyStaged,
    /// A tracked path whose content matches the head snapshot
    Unchanged,
}

/// Result of unstaging or removing a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Unstaged,
    MarkedForRemoval,
    NothingToRemove,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingArea {
    staged: Vec<PathBuf>,
    removed: Vec<PathBuf>,
}

impl StagingArea {
    /// Stage `path` with its current working-tree content
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the repository root
    /// * `current` - Current working-tree content of `path`
    /// * `snapshot` - Content of `path` in the head commit, `None` if untracked
    pub fn add(&mut self, path: &Path, current: &[u8], snapshot: Option<&[u8]>) -> AddOutcome {
        match snapshot {
            None if self.is_staged(path) => AddOutcome::AlreadyStaged,
            None => {
                self.staged.push(path.to_path_buf());
                AddOutcome::Staged
            }
            Some(snapshot) => {
                self.removed.retain(|removed| removed != path);

                if snapshot == current {
                    AddOutcome::Unchanged
                } else {
                    if !self.is_staged(path) {
                        self.staged.push(path.to_path_buf());
                    }
                    AddOutcome::Staged
                }
            }
        }
    }

    /// Unstage `path`, or mark it for removal if the head commit tracks it
    pub fn remove(&mut self, path: &Path, head_manifest: &Manifest) -> RemoveOutcome {
        if self.is_staged(path) {
            self.staged.retain(|staged| staged != path);
            RemoveOutcome::Unstaged
        } else if head_manifest.contains_key(path) {
            if !self.is_removed(path) {
                self.removed.push(path.to_path_buf());
            }
            RemoveOutcome::MarkedForRemoval
        } else {
            RemoveOutcome::NothingToRemove
        }
    }

    pub fn clear(&mut self) {
        self.staged.clear();
        self.removed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.staged.iter().any(|staged| staged == path)
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.iter().any(|removed| removed == path)
    }

    pub fn staged(&self) -> impl Iterator<Item = &Path> {
        self.staged.iter().map(PathBuf::as_path)
    }

    pub fn removed(&self) -> impl Iterator<Item = &Path> {
        self.removed.iter().map(PathBuf::as_path)
    }
}
