//! Per-file reconciliation of two branch heads
//!
//! Given the merge base, our head and their head, every path is settled on
//! its own:
//!
//! | present in      | base vs ours vs theirs            | result                      |
//! |-----------------|-----------------------------------|-----------------------------|
//! | theirs only     |                                   | take theirs                 |
//! | both            | base != theirs, base == ours      | take theirs (fast-forward)  |
//! | both            | base, ours and theirs all differ  | conflict, keep ours         |
//! | both            | anything else                     | keep ours                   |
//! | ours only       |                                   | delete                      |
//!
//! "Take theirs" writes their content into our commit's storage and over the
//! working copy. A conflict keeps our version and writes theirs next to it as
//! `<path>.conflicted`, both in storage and in the working tree. The
//! `.conflicted` copy is not tracked.
//!
//! Nothing here aborts: an I/O error on one path is recorded and the next path
//! is processed.

use crate::areas::database::Database;
use crate::areas::workspace::FileStore;
use crate::artifacts::objects::commit::{Commit, Manifest};
use crate::errors::{FileAction, FileFailure};
use std::path::{Path, PathBuf};

/// Suffix of the file holding their side of a conflicted path
pub const CONFLICT_SUFFIX: &str = ".conflicted";

/// Outcome of three-way comparison for a path present on both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    KeepOurs,
    TakeTheirs,
    Conflict,
}

/// Decide a path present in both heads; `base` is `None` if the merge base
/// does not track it
pub fn resolve(base: Option<&[u8]>, ours: &[u8], theirs: &[u8]) -> Resolution {
    let base_is_theirs = base == Some(theirs);
    let base_is_ours = base == Some(ours);

    if !base_is_theirs && base_is_ours {
        Resolution::TakeTheirs
    } else if !base_is_theirs && !base_is_ours && ours != theirs {
        Resolution::Conflict
    } else {
        Resolution::KeepOurs
    }
}

#[derive(Debug, Default)]
pub struct Reconciliation {
    /// Manifest to record on our head commit
    pub manifest: Manifest,
    /// Paths that got a `.conflicted` companion
    pub conflicts: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

pub fn conflicted_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(CONFLICT_SUFFIX);

    PathBuf::from(name)
}

/// Reconcile `theirs` into `ours`, using `base` as the merge base
pub fn reconcile(
    store: &dyn FileStore,
    database: &Database,
    base: &Commit,
    ours: &Commit,
    theirs: &Commit,
) -> Reconciliation {
    let mut result = Reconciliation {
        manifest: ours.manifest().clone(),
        ..Reconciliation::default()
    };

    for (path, their_location) in theirs.manifest() {
        let Some(our_location) = ours.location(path) else {
            tracing::debug!(path = %path.display(), "taking file only present on the merged branch");
            let location = database.location(ours.id(), path);

            match take(store, their_location, &location, path) {
                Ok(()) => {
                    result.manifest.insert(path.clone(), location);
                }
                Err(failure) => result.failures.push(failure),
            }
            continue;
        };

        let contents = load(store, database, base.location(path), path).and_then(|b| {
            let o = load(store, database, Some(our_location), path)?;
            let t = load(store, database, Some(their_location), path)?;
            Ok((b, o.unwrap_or_default(), t.unwrap_or_default()))
        });
        let (b, o, t) = match contents {
            Ok(contents) => contents,
            Err(failure) => {
                result.failures.push(failure);
                continue;
            }
        };

        match resolve(b.as_deref(), &o, &t) {
            Resolution::KeepOurs => {}
            Resolution::TakeTheirs => {
                tracing::debug!(path = %path.display(), "fast-forwarding file");
                let location = database.location(ours.id(), path);

                match take(store, their_location, &location, path) {
                    Ok(()) => {
                        result.manifest.insert(path.clone(), location);
                    }
                    Err(failure) => result.failures.push(failure),
                }
            }
            Resolution::Conflict => {
                tracing::debug!(path = %path.display(), "conflicting changes");
                let conflicted = conflicted_path(path);
                let location = database.location(ours.id(), &conflicted);

                if let Err(failure) = take(store, their_location, &location, &conflicted) {
                    result.failures.push(failure);
                }
                result.conflicts.push(path.clone());
            }
        }
    }

    for (path, our_location) in ours.manifest() {
        if theirs.tracks(path) {
            continue;
        }

        tracing::debug!(path = %path.display(), "removing file absent from the merged branch");
        for target in [our_location.as_path(), path.as_path()] {
            if let Err(err) = store.delete(target) {
                result
                    .failures
                    .push(FileFailure::new(path, FileAction::Delete, err));
            }
        }
        result.manifest.remove(path);
    }

    result
}

// copy their content into our storage, then over the working copy
fn take(
    store: &dyn FileStore,
    their_location: &Path,
    our_location: &Path,
    path: &Path,
) -> Result<(), FileFailure> {
    store
        .copy(their_location, our_location)
        .and_then(|_| store.copy(their_location, path))
        .map_err(|err| FileFailure::new(path, FileAction::Copy, err))
}

fn load(
    store: &dyn FileStore,
    database: &Database,
    location: Option<&Path>,
    path: &Path,
) -> Result<Option<Vec<u8>>, FileFailure> {
    database
        .load(store, location)
        .map_err(|err| FileFailure::new(path, FileAction::Read, err))
}
