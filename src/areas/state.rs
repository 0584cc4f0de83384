//! Persisted repository state
//!
//! Everything except file contents lives in one JSON document,
//! `.sprig/state.json`: the commit graph with its branch tags, the branch
//! registry, the staging area and the head. It is loaded once when a
//! [`Repository`](crate::areas::repository::Repository) is opened and written
//! back once after a command finishes.

use crate::areas::commit_graph::CommitGraph;
use crate::areas::database::Database;
use crate::areas::index::StagingArea;
use crate::areas::refs::{BranchRegistry, RefsError};
use crate::areas::workspace::FileStore;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const STATE_FILE: &str = "state.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryState {
    pub graph: CommitGraph,
    pub refs: BranchRegistry,
    pub index: StagingArea,
    pub head: CommitId,
    pub current_branch: BranchName,
}

impl RepositoryState {
    /// State of a freshly initialized repository: the root commit on `master`
    pub fn initial(timestamp: DateTime<FixedOffset>) -> Result<Self, RefsError> {
        let mut graph = CommitGraph::default();
        let root = graph.create_root(timestamp).id();

        let mut refs = BranchRegistry::default();
        refs.create(BranchName::default_branch(), root)?;

        Ok(RepositoryState {
            graph,
            refs,
            index: StagingArea::default(),
            head: root,
            current_branch: BranchName::default_branch(),
        })
    }

    pub fn path(database: &Database) -> PathBuf {
        database.path().join(STATE_FILE)
    }

    /// Load the state file, `None` when the repository was never initialized
    pub fn load(store: &dyn FileStore, database: &Database) -> anyhow::Result<Option<Self>> {
        let path = Self::path(database);
        if !store.exists(&path) {
            return Ok(None);
        }

        let data = store
            .read(&path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        let state = serde_json::from_slice(&data)
            .with_context(|| format!("Corrupt repository state in {}", path.display()))?;

        Ok(Some(state))
    }

    pub fn save(&self, store: &dyn FileStore, database: &Database) -> anyhow::Result<()> {
        let path = Self::path(database);
        let json =
            serde_json::to_vec_pretty(self).context("Unable to serialize repository state")?;

        store
            .write(&path, &json)
            .with_context(|| format!("Unable to save sprig files to {}", path.display()))
    }
}
