//! Data types and algorithms the commands are built from
//!
//! - `branch`: branch names and their validation
//! - `checkout`: working tree migrations between two commits
//! - `core`: prompts and the pager writer
//! - `merge`: merge base lookup and per-file reconciliation
//! - `objects`: commits and commit ids
//! - `status`: the status report

pub mod branch;
pub mod checkout;
pub mod core;
pub mod merge;
pub mod objects;
pub mod status;
