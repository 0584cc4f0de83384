//! Commit records
//!
//! - **Commit**: snapshot metadata plus the manifest of tracked paths
//! - **CommitId**: dense integer id assigned at creation time

pub mod commit;
pub mod commit_id;
