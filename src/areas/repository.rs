use crate::areas::commit_graph::CommitGraph;
use crate::areas::database::Database;
use crate::areas::index::StagingArea;
use crate::areas::refs::BranchRegistry;
use crate::areas::state::RepositoryState;
use crate::areas::workspace::{DiskFileStore, FileStore};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{FileFailure, RepositoryError};
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    pub(crate) store: Box<dyn FileStore>,
    pub(crate) database: Database,
    pub(crate) state: RepositoryState,
    initialized: bool,
}

impl Repository {
    /// Open the repository rooted at `path`, creating the directory if needed
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?.into_boxed_path();

        let store = DiskFileStore::new(path.clone());

        Ok(Repository::with_store(path, Box::new(store), writer))
    }

    /// Open a repository on top of an arbitrary file store
    ///
    /// An unreadable or corrupt state file is logged and the repository is
    /// treated as uninitialized.
    pub fn with_store(
        path: Box<Path>,
        store: Box<dyn FileStore>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        let database = Database::default();

        let (state, initialized) = match RepositoryState::load(store.as_ref(), &database) {
            Ok(Some(state)) => (state, true),
            Ok(None) => (RepositoryState::default(), false),
            Err(err) => {
                tracing::error!(error = ?err, "failed to load repository state");
                (RepositoryState::default(), false)
            }
        };

        Repository {
            path,
            writer: RefCell::new(writer),
            store,
            database,
            state,
            initialized,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn store(&self) -> &dyn FileStore {
        self.store.as_ref()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.state.graph
    }

    pub fn refs(&self) -> &BranchRegistry {
        &self.state.refs
    }

    pub fn index(&self) -> &StagingArea {
        &self.state.index
    }

    pub fn head(&self) -> CommitId {
        self.state.head
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.state.current_branch
    }

    pub fn head_commit(&self) -> Result<&Commit, RepositoryError> {
        Ok(self.state.graph.get(self.state.head)?)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn set_initialized(&mut self, state: RepositoryState) {
        self.state = state;
        self.initialized = true;
    }

    pub fn ensure_initialized(&self) -> Result<(), RepositoryError> {
        if self.initialized {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized)
        }
    }

    /// Turn an operator-supplied path into a clean path relative to the root
    ///
    /// Absolute paths must lie under the root. `.` components are dropped
    /// and `..` is folded lexically. Paths that climb above the root or land
    /// inside the metadata directory are refused.
    pub fn resolve_path(&self, path: &Path) -> Result<PathBuf, RepositoryError> {
        let outside = || RepositoryError::OutsideRepository(path.to_path_buf());

        let relative = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| outside())?
        } else {
            path
        };

        let mut resolved = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !resolved.pop() {
                        return Err(outside());
                    }
                }
                Component::Normal(part) => resolved.push(part),
                Component::RootDir | Component::Prefix(_) => return Err(outside()),
            }
        }

        if resolved.starts_with(self.database.path()) {
            return Err(RepositoryError::InsideMetadata(path.to_path_buf()));
        }

        Ok(resolved)
    }

    /// Print one line per file that could not be processed
    pub(crate) fn report_failures(&self, failures: &[FileFailure]) -> std::io::Result<()> {
        let mut writer = self.writer();
        for failure in failures {
            writeln!(writer, "{}", failure)?;
        }

        Ok(())
    }

    /// Write the state back to `.sprig/state.json`
    ///
    /// An uninitialized repository has nothing to save.
    pub fn save(&self) -> anyhow::Result<()> {
        if !self.initialized {
            return Ok(());
        }

        self.state.save(self.store.as_ref(), &self.database)
    }
}
