//! Repository state and storage
//!
//! - `commit_graph`: arena of commits with parent/child links and branch tags
//! - `database`: per-commit snapshot directories under `.sprig/`
//! - `index`: staging area of pending additions and removals
//! - `refs`: branch name to head commit registry
//! - `repository`: the handle every command runs against
//! - `state`: persisted form of the above in `.sprig/state.json`
//! - `workspace`: the [`workspace::FileStore`] trait and its disk implementation

pub mod commit_graph;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod state;
pub mod workspace;
