//! Branch references
//!
//! Maps branch names to the commit each branch currently points at. Which
//! branch is checked out lives on the repository itself, so the registry only
//! needs it to refuse deleting the current branch.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum RefsError {
    #[error("invalid branch name: {0}")]
    InvalidName(String),
    #[error("The branch <{0}> already exists")]
    AlreadyExists(BranchName),
    #[error("The branch <{0}> does not exist")]
    NotFound(String),
    #[error("Cannot remove the current branch")]
    IsCurrentBranch,
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRegistry {
    heads: BTreeMap<BranchName, CommitId>,
}

impl BranchRegistry {
    pub fn create(&mut self, name: BranchName, target: CommitId) -> Result<(), RefsError> {
        if self.heads.contains_key(&name) {
            return Err(RefsError::AlreadyExists(name));
        }

        tracing::debug!(branch = %name, %target, "creating branch");
        self.heads.insert(name, target);

        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<CommitId, RefsError> {
        self.heads
            .get(name)
            .copied()
            .ok_or_else(|| RefsError::NotFound(name.to_string()))
    }

    /// Point an existing branch at `target`
    pub fn retarget(&mut self, name: &str, target: CommitId) -> Result<(), RefsError> {
        let head = self
            .heads
            .get_mut(name)
            .ok_or_else(|| RefsError::NotFound(name.to_string()))?;
        *head = target;

        Ok(())
    }

    /// Delete `name`, returning the commit it pointed at
    ///
    /// The current branch can never be deleted.
    pub fn delete(&mut self, name: &str, current: &BranchName) -> Result<CommitId, RefsError> {
        if current == name {
            return Err(RefsError::IsCurrentBranch);
        }

        self.heads
            .remove(name)
            .ok_or_else(|| RefsError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.heads.contains_key(name)
    }

    /// Branch names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &BranchName> {
        self.heads.keys()
    }

    /// Find the stored name equal to `name`
    pub fn resolve(&self, name: &str) -> Result<BranchName, RefsError> {
        self.heads
            .get_key_value(name)
            .map(|(name, _)| name.clone())
            .ok_or_else(|| RefsError::NotFound(name.to_string()))
    }
}
