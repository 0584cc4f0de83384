//! Checkout support
//!
//! - `migration`: plan and apply the working-tree changes needed to move the
//!   head to another commit

pub mod migration;
