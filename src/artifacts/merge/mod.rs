//! Merging one branch into the current branch
//!
//! - `common_ancestor`: tag-based merge base lookup
//! - `reconcile`: three-way, per-file reconciliation against that base

pub mod common_ancestor;
pub mod reconcile;
