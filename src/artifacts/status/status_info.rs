use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;
use derive_new::new;
use std::fmt;
use std::path::PathBuf;

/// Snapshot of branch and staging information printed by `status`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StatusReport {
    pub current_branch: BranchName,
    /// Every other branch, in name order
    pub other_branches: Vec<BranchName>,
    pub staged: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Branches ===")?;
        writeln!(f, "On branch {}", self.current_branch.to_string().green())?;
        if !self.other_branches.is_empty() {
            writeln!(f, "Other branches: ")?;
            for branch in &self.other_branches {
                writeln!(f, "{}", branch)?;
            }
        }
        writeln!(f)?;

        if !self.staged.is_empty() {
            writeln!(f, "=== Staged Files ===")?;
            for path in &self.staged {
                writeln!(f, "{}", path.display().to_string().green())?;
            }
            writeln!(f)?;
        }

        if !self.removed.is_empty() {
            writeln!(f, "=== Files Marked for Removal ===")?;
            for path in &self.removed {
                writeln!(f, "{}", path.display().to_string().red())?;
            }
            writeln!(f)?;
        }

        if self.is_clean() {
            writeln!(f, "Nothing to commit. Working directory clean")?;
        }

        Ok(())
    }
}
