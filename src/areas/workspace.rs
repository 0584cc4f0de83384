//! File primitives used by every repository operation
//!
//! All working-tree and snapshot-storage access goes through the [`FileStore`]
//! trait. Paths handed to a store are relative to the repository root, so the
//! working copy of `wug.txt` and its snapshot `.sprig/1/wug.txt` are
//! addressed the same way.
//!
//! Every call reports its own `io::Result`. Callers that touch many files
//! collect failures per path instead of aborting on the first one.

use file_guard::Lock;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

pub trait FileStore {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// Write `data` to `path`, creating missing parent directories
    fn write(&self, path: &Path, data: &[u8]) -> std::io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Delete the file at `path`; deleting a missing file is not an error
    fn delete(&self, path: &Path) -> std::io::Result<()>;

    fn create_dir(&self, path: &Path) -> std::io::Result<()>;

    /// Copy `src` over `dst`, replacing whatever `dst` held
    fn copy(&self, src: &Path, dst: &Path) -> std::io::Result<()> {
        let data = self.read(src)?;
        self.write(dst, &data)
    }
}

/// File store backed by the local file system, rooted at the repository path
#[derive(Debug)]
pub struct DiskFileStore {
    path: Box<Path>,
}

impl DiskFileStore {
    pub fn new(path: Box<Path>) -> Self {
        DiskFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn make_parent_dirs(&self, path: &Path) -> std::io::Result<()> {
        match self.path.join(path).parent() {
            Some(parent) if !parent.exists() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

impl FileStore for DiskFileStore {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path.join(path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Shared, 0, 1)?;

        let mut data = Vec::new();
        lock.deref_mut().read_to_end(&mut data)?;

        Ok(data)
    }

    fn write(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        self.make_parent_dirs(path)?;

        // open the file as WRONLY, CREAT and TRUNC before taking the lock
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path.join(path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(data)?;

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.path.join(path).exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.path.join(path).is_dir()
    }

    fn delete(&self, path: &Path) -> std::io::Result<()> {
        match std::fs::remove_file(self.path.join(path)) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            result => result,
        }
    }

    fn create_dir(&self, path: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(self.path.join(path))
    }

    fn copy(&self, src: &Path, dst: &Path) -> std::io::Result<()> {
        self.make_parent_dirs(dst)?;
        std::fs::copy(self.path.join(src), self.path.join(dst))?;

        Ok(())
    }
}
