use crate::common::command::{commit_file, init_repository_dir, run_sprig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn delete_branch_keeps_its_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "cool-beans"])
        .assert()
        .success();
    run_sprig_command(dir, &["checkout", "cool-beans"])
        .assert()
        .success();
    commit_file(dir, "hug.txt", "hug", "added hug");
    run_sprig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_sprig_command(dir, &["rm-branch", "cool-beans"])
        .assert()
        .success()
        .stdout("");

    run_sprig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other branches").not());
    run_sprig_command(dir, &["find", "added hug"])
        .assert()
        .success()
        .stdout("The id of the commit is: 2\n");
    run_sprig_command(dir, &["checkout", "cool-beans"])
        .assert()
        .code(1)
        .stdout("File does not exist in the most recent commit, or no such branch exists\n");
}

#[rstest]
#[case::current("master", "Cannot remove the current branch\n")]
#[case::unknown("ghost", "The branch <ghost> does not exist\n")]
fn delete_branch_fails(init_repository_dir: TempDir, #[case] name: &str, #[case] message: &str) {
    run_sprig_command(init_repository_dir.path(), &["rm-branch", name])
        .assert()
        .code(1)
        .stdout(message.to_string());
}
