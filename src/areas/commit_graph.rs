//! Commit graph
//!
//! The graph owns every commit ever created, stored in a flat arena indexed
//! by [`CommitId`]. Parent and child links are plain ids, so the structure
//! has no reference cycles and serializes as two vectors.
//!
//! ## Branch tags
//!
//! Instead of a real ancestor index, each commit carries the set of branch
//! names whose history contains it. The tags live in a side table next to
//! the arena so that commit records themselves stay append-only.
//!
//! > For any branch `b`, every commit on the path from the head of `b` back
//! > to the root is tagged with `b`.
//!
//! Every operation that moves a branch has to keep this true: `branch` tags
//! the whole chain, `commit` tags the new commit, `reset` and `rm-branch`
//! prune tags that no longer apply. The merge base heuristic in
//! [`common_ancestor`](crate::artifacts::merge::common_ancestor) depends on it.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::{Commit, Manifest};
use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Message of the root commit created by `init`
pub const ROOT_MESSAGE: &str = "initial commit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("No commit with that id exists")]
    NotFound(CommitId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitGraph {
    commits: Vec<Commit>,
    /// Branch tags, indexed like `commits`
    branches: Vec<BTreeSet<BranchName>>,
}

impl CommitGraph {
    /// Create the root commit (id 0, its own parent), tagged with `master`
    pub fn create_root(&mut self, timestamp: DateTime<FixedOffset>) -> &Commit {
        debug_assert!(self.commits.is_empty(), "root commit created twice");

        let root = Commit::new(
            CommitId::ROOT,
            CommitId::ROOT,
            ROOT_MESSAGE.to_string(),
            timestamp,
            Manifest::new(),
        );
        self.commits.push(root);
        self.branches
            .push(BTreeSet::from([BranchName::default_branch()]));

        &self.commits[0]
    }

    /// Append a commit on top of `parent`
    ///
    /// The new commit gets the next free id and no branch tags; the caller
    /// is responsible for tagging it with the branch it was committed on.
    pub fn create_commit(
        &mut self,
        parent: CommitId,
        message: String,
        manifest: Manifest,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<&Commit, GraphError> {
        let id = self.next_id();
        self.get_mut(parent)?.add_child(id);

        self.commits
            .push(Commit::new(id, parent, message, timestamp, manifest));
        self.branches.push(BTreeSet::new());

        tracing::debug!(%id, %parent, "created commit");

        Ok(&self.commits[id.index()])
    }

    pub fn get(&self, id: CommitId) -> Result<&Commit, GraphError> {
        self.commits.get(id.index()).ok_or(GraphError::NotFound(id))
    }

    fn get_mut(&mut self, id: CommitId) -> Result<&mut Commit, GraphError> {
        self.commits
            .get_mut(id.index())
            .ok_or(GraphError::NotFound(id))
    }

    pub fn contains(&self, id: CommitId) -> bool {
        id.index() < self.commits.len()
    }

    /// Id the next created commit will receive
    pub fn next_id(&self) -> CommitId {
        CommitId::new(self.commits.len())
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// All commits in id order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Commit> {
        self.commits.iter()
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter().rev()
    }

    /// Walk from `start` back to the root, yielding `start` first
    ///
    /// The walk is lazy; an unknown `start` yields nothing.
    pub fn walk_to_root(&self, start: CommitId) -> Ancestors<'_> {
        Ancestors {
            graph: self,
            next: Some(start),
        }
    }

    /// Overwrite the manifest of an existing commit
    ///
    /// Only merge does this: the reconciled result is recorded on the head
    /// commit itself instead of a new merge commit.
    pub fn replace_manifest(&mut self, id: CommitId, manifest: Manifest) -> Result<(), GraphError> {
        self.get_mut(id)?.set_manifest(manifest);

        Ok(())
    }

    pub fn branches_of(&self, id: CommitId) -> Result<&BTreeSet<BranchName>, GraphError> {
        self.branches.get(id.index()).ok_or(GraphError::NotFound(id))
    }

    pub fn is_tagged(&self, id: CommitId, branch: &str) -> bool {
        self.branches
            .get(id.index())
            .is_some_and(|tags| tags.contains(branch))
    }

    pub fn tag_branch(&mut self, id: CommitId, branch: &BranchName) -> Result<(), GraphError> {
        self.branches
            .get_mut(id.index())
            .ok_or(GraphError::NotFound(id))?
            .insert(branch.clone());

        Ok(())
    }

    /// Tag `start` and every ancestor of it with `branch`
    pub fn tag_chain(&mut self, start: CommitId, branch: &BranchName) -> Result<(), GraphError> {
        let chain = self
            .walk_to_root(start)
            .map(Commit::id)
            .collect::<Vec<_>>();

        if chain.is_empty() {
            return Err(GraphError::NotFound(start));
        }

        for id in chain {
            self.tag_branch(id, branch)?;
        }

        Ok(())
    }

    /// Remove `branch` from `id` and from every descendant still carrying it
    ///
    /// Descent stops at children that no longer carry the tag: their subtree
    /// was either pruned already or belongs to a diverged history.
    pub fn untag_branch_recursive(&mut self, id: CommitId, branch: &str) -> Result<(), GraphError> {
        self.get(id)?;

        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(tags) = self.branches.get_mut(current.index()) {
                tags.remove(branch);
            }

            let commit = self.get(current)?;
            pending.extend(
                commit
                    .children()
                    .iter()
                    .copied()
                    .filter(|child| self.is_tagged(*child, branch)),
            );
        }

        Ok(())
    }

    /// Remove `branch` from every commit in the graph
    ///
    /// A linear scan over the whole arena; used when a branch is deleted.
    pub fn untag_everywhere(&mut self, branch: &str) {
        for tags in self.branches.iter_mut() {
            tags.remove(branch);
        }
    }
}

/// Lazy walk from a commit back to the root, see [`CommitGraph::walk_to_root`]
#[derive(Debug, Clone)]
pub struct Ancestors<'g> {
    graph: &'g CommitGraph,
    next: Option<CommitId>,
}

impl<'g> Iterator for Ancestors<'g> {
    type Item = &'g Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.graph.get(self.next?).ok()?;

        // parents always have smaller ids, so this terminates at the root
        self.next = if commit.is_root() {
            None
        } else {
            Some(commit.parent())
        };

        Some(commit)
    }
}
