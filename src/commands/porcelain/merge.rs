use crate::areas::repository::Repository;
use crate::artifacts::core::confirm::Confirm;
use crate::artifacts::merge::common_ancestor::find_common_ancestor;
use crate::artifacts::merge::reconcile::{conflicted_path, reconcile};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{FileFailure, RepositoryError};
use std::io::Write;
use std::path::PathBuf;

pub const MERGE_WARNING: &str =
    "This operation might add, remove and modify some files in the working directory";

#[derive(Debug)]
pub struct MergeOutcome {
    /// Merge base the three-way comparison ran against
    pub base: CommitId,
    /// Paths that got a `.conflicted` companion file
    pub conflicts: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl Repository {
    /// Merge branch `name` into the current branch
    ///
    /// No merge commit is created: the reconciled manifest replaces the one
    /// of the head commit, and the merged branch's history is tagged with the
    /// current branch so the next merge starts from the merged state.
    /// Each conflict is announced with the name of its `.conflicted` file.
    pub fn merge(
        &mut self,
        name: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<MergeOutcome, RepositoryError> {
        self.ensure_initialized()?;

        if self.state.current_branch == *name {
            return Err(RepositoryError::CannotMergeWithSelf);
        }
        let other_head = self.state.refs.lookup(name)?;
        let head = self.state.head;
        if other_head == head {
            return Err(RepositoryError::AlreadyUpToDate);
        }
        if !self.index().is_empty() {
            let pending = self
                .index()
                .staged()
                .chain(self.index().removed())
                .map(|path| path.to_path_buf())
                .collect();
            return Err(RepositoryError::UncommittedChanges(pending));
        }
        if !confirm.confirm(MERGE_WARNING)? {
            return Err(RepositoryError::Cancelled);
        }

        let current = self.state.current_branch.clone();
        let graph = self.graph();
        let base = find_common_ancestor(graph, head, other_head, current.as_ref(), name)?;
        let result = reconcile(
            self.store.as_ref(),
            &self.database,
            base,
            graph.get(head)?,
            graph.get(other_head)?,
        );
        let base = base.id();

        tracing::debug!(
            %base,
            branch = name,
            conflicts = result.conflicts.len(),
            failures = result.failures.len(),
            "merged"
        );

        self.state.graph.replace_manifest(head, result.manifest)?;
        self.state.graph.tag_chain(other_head, &current)?;
        self.report_failures(&result.failures)?;
        for path in &result.conflicts {
            writeln!(
                self.writer(),
                "Encountered a merge conflict in <{}>, their version is in <{}>",
                path.display(),
                conflicted_path(path).display()
            )?;
        }

        Ok(MergeOutcome {
            base,
            conflicts: result.conflicts,
            failures: result.failures,
        })
    }
}
