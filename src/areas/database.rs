//! Per-commit snapshot storage
//!
//! Every commit owns a directory under the repository metadata directory
//! holding a full copy of each tracked file:
//!
//! ```text
//! .sprig/
//!   state.json
//!   0/            (root commit, empty)
//!   1/wug.txt
//!   2/wug.txt
//!   2/test_files/hug.txt
//! ```
//!
//! There is no deduplication against ancestors: a commit's storage is
//! self-contained and can be restored without looking at any other commit.

use crate::areas::workspace::FileStore;
use crate::artifacts::objects::commit_id::CommitId;
use std::path::{Path, PathBuf};

/// Name of the repository metadata directory
pub const METADATA_DIR: &str = ".sprig";

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Path of the metadata directory, relative to the repository root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Storage directory of commit `id`
    pub fn commit_dir(&self, id: CommitId) -> PathBuf {
        self.path.join(id.to_string())
    }

    /// Storage location of `path` for commit `id`
    ///
    /// `path` must already be relative to the repository root, see
    /// [`Repository::resolve_path`](crate::areas::repository::Repository::resolve_path).
    pub fn location(&self, id: CommitId, path: &Path) -> PathBuf {
        debug_assert!(path.is_relative(), "unresolved path {}", path.display());
        self.commit_dir(id).join(path)
    }

    /// Copy the file at `src` into the snapshot of commit `id`
    ///
    /// # Returns
    ///
    /// The storage location the content was written to
    pub fn store_copy(
        &self,
        store: &dyn FileStore,
        id: CommitId,
        path: &Path,
        src: &Path,
    ) -> std::io::Result<PathBuf> {
        let location = self.location(id, path);
        store.copy(src, &location)?;

        Ok(location)
    }

    /// Load the content stored at `location`
    ///
    /// Absent content (`None`) is distinct from an empty file; merge compares
    /// the two differently.
    pub fn load(
        &self,
        store: &dyn FileStore,
        location: Option<&Path>,
    ) -> std::io::Result<Option<Vec<u8>>> {
        match location {
            Some(location) => store.read(location).map(Some),
            None => Ok(None),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Database::new(PathBuf::from(METADATA_DIR).into_boxed_path())
    }
}
