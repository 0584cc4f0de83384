//! User-facing commands
//!
//! - `init`: create `.sprig/` and the root commit
//! - `add` / `rm`: stage files for addition or removal
//! - `commit`: snapshot staged files into a new commit
//! - `log` / `global-log` / `find`: inspect history
//! - `status`: branches and staged changes
//! - `checkout`: restore a file or switch branches
//! - `branch` / `rm-branch`: manage branches
//! - `reset`: move the head back along the current branch
//! - `merge`: reconcile another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
