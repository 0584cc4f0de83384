mod merge_diverged_branches;
mod merge_preconditions;
