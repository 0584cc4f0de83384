mod commit_stores_full_snapshots;
mod commit_without_changes_fails;
