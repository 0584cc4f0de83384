//! Common ancestor lookup for merges
//!
//! Commits carry the names of the branches whose history contains them (see
//! [`CommitGraph`](crate::areas::commit_graph::CommitGraph)). The merge base of
//! two branches is found by walking back from the current head and stopping at
//! the first commit tagged with both branch names:
//!
//! ```text
//!          3 - 4        feature
//!         /
//! 0 - 1 - 2 - 5         master (head)
//! ```
//!
//! Walking `5, 2, ...` stops at `2`, the first commit tagged with both
//! `master` and `feature`. When no commit on the walk carries both tags the
//! root is used.
//!
//! ## Limitations
//!
//! This is a heuristic, not a real lowest-common-ancestor search. It relies on
//! the branch tags being accurate, and tags only describe where a branch *has
//! been*, not the graph itself. A branch that was deleted and recreated under
//! the same name, or a reset that pruned tags from part of a history, can make
//! the walk stop at a commit that is not the true merge base, or fall through
//! to the root.

use crate::areas::commit_graph::{CommitGraph, GraphError};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

/// Find the merge base of the `current` and `other` branches
///
/// # Arguments
///
/// * `head` - Head commit of the current branch, where the walk starts
/// * `branch_head` - Head commit of the other branch
/// * `current` - Name of the current branch
/// * `other` - Name of the branch being merged in
pub fn find_common_ancestor<'g>(
    graph: &'g CommitGraph,
    head: CommitId,
    branch_head: CommitId,
    current: &str,
    other: &str,
) -> Result<&'g Commit, GraphError> {
    let ancestor = graph
        .walk_to_root(head)
        .find(|commit| graph.is_tagged(commit.id(), current) && graph.is_tagged(commit.id(), other));

    match ancestor {
        Some(ancestor) => {
            tracing::debug!(%head, %branch_head, ancestor = %ancestor.id(), "found common ancestor");
            Ok(ancestor)
        }
        None => {
            tracing::debug!(%head, %branch_head, "no tagged common ancestor, using root");
            graph.get(CommitId::ROOT)
        }
    }
}
