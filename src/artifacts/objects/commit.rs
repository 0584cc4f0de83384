//! Commit record
//!
//! A commit is a complete snapshot of every tracked path at one point in
//! history. Unlike git, the snapshot is not content addressed: each commit
//! owns a storage directory (`.sprig/<id>/`) holding a full copy of every
//! tracked file, and its manifest maps each tracked path to that copy.
//!
//! ## Graph edges
//!
//! - `parent`: the commit this one was created from. The root commit is its
//!   own parent, which is how traversals detect the end of history.
//! - `children`: forward edges to commits created on top of this one. Merges
//!   and resets never add edges, so the commits always form a tree.
//!
//! Branch membership is kept outside the commit record; see
//! [`CommitGraph`](crate::areas::commit_graph::CommitGraph).

use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Format used when printing commit timestamps in `log` and `global-log`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Tracked path -> storage location of that path's content for one commit
pub type Manifest = BTreeMap<PathBuf, PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Commit {
    id: CommitId,
    parent: CommitId,
    message: String,
    timestamp: DateTime<FixedOffset>,
    manifest: Manifest,
    #[new(default)]
    children: BTreeSet<CommitId>,
}

impl Commit {
    pub fn id(&self) -> CommitId {
        self.id
    }

    pub fn parent(&self) -> CommitId {
        self.parent
    }

    /// The root commit is the only commit that is its own parent
    pub fn is_root(&self) -> bool {
        self.parent == self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn tracks(&self, path: &Path) -> bool {
        self.manifest.contains_key(path)
    }

    /// Storage location of `path` in this commit, if it is tracked
    pub fn location(&self, path: &Path) -> Option<&Path> {
        self.manifest.get(path).map(PathBuf::as_path)
    }

    pub fn children(&self) -> &BTreeSet<CommitId> {
        &self.children
    }

    pub(crate) fn add_child(&mut self, child: CommitId) {
        self.children.insert(child);
    }

    pub(crate) fn set_manifest(&mut self, manifest: Manifest) {
        self.manifest = manifest;
    }
}
