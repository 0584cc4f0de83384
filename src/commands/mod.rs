//! Command implementations
//!
//! Every command is an `impl Repository` block under `porcelain`, writing its
//! user-facing output through [`crate::areas::repository::Repository::writer`].

pub mod porcelain;
