//! Commit identifier
//!
//! Commits are addressed by a dense, monotonically assigned integer: the
//! size of the commit graph at the moment the commit was created. Ids are
//! never reused, so they double as a stable naming scheme on the command line
//! and as the directory name of the commit's snapshot storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer id of a commit in the commit graph arena
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CommitId(usize);

impl CommitId {
    /// Id of the root commit created by `init`
    pub const ROOT: CommitId = CommitId(0);

    pub fn new(id: usize) -> Self {
        CommitId(id)
    }

    /// Position of the commit inside the graph arena
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for CommitId {
    fn from(id: usize) -> Self {
        CommitId(id)
    }
}

impl FromStr for CommitId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<usize>().map(CommitId)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
