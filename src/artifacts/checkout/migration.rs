//! Working-tree migration between two commits
//!
//! Moving the head from one commit to another (branch checkout, reset)
//! rewrites the working tree in two steps:
//!
//! 1. every path tracked by the target is restored from the target's storage
//! 2. every path tracked by the current commit but not by the target is deleted
//!
//! Changes are planned first and applied afterwards. Applying never stops
//! early: each file that cannot be restored or deleted is reported as a
//! [`FileFailure`] and the rest of the plan still runs. Untracked files are
//! never touched.

use crate::areas::workspace::FileStore;
use crate::artifacts::objects::commit::Manifest;
use crate::errors::{FileAction, FileFailure};
use std::path::PathBuf;

/// File system action required to reach the target commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Copy the stored content at `location` over the working copy of `path`
    Restore { path: PathBuf, location: PathBuf },
    Delete { path: PathBuf },
}

#[derive(Debug, Default)]
pub struct Migration {
    actions: Vec<Action>,
}

impl Migration {
    pub fn plan(current: &Manifest, target: &Manifest) -> Self {
        let restores = target.iter().map(|(path, location)| Action::Restore {
            path: path.clone(),
            location: location.clone(),
        });
        let deletes = current
            .keys()
            .filter(|path| !target.contains_key(*path))
            .map(|path| Action::Delete { path: path.clone() });

        Migration {
            actions: restores.chain(deletes).collect(),
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn apply(&self, store: &dyn FileStore) -> Vec<FileFailure> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::Restore { path, location } => store
                    .copy(location, path)
                    .err()
                    .map(|err| FileFailure::new(path, FileAction::Copy, err)),
                Action::Delete { path } => store
                    .delete(path)
                    .err()
                    .map(|err| FileFailure::new(path, FileAction::Delete, err)),
            })
            .collect()
    }
}
