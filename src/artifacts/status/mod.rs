//! Repository status
//!
//! - `status_info`: the report printed by `status`: branches plus the staged
//!   and removed paths

pub mod status_info;
