use crate::common::command::{NOT_WUG, init_repository_dir, run_sprig_command, sprig_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_without_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    // modified but not staged
    write_file(FileSpec::new(dir.join("wug.txt"), NOT_WUG.to_string()));

    sprig_commit(dir, "nothing staged")
        .assert()
        .code(1)
        .stdout("No changes added to the commit\n");

    assert!(!dir.join(".sprig").join("2").exists());
    run_sprig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit 2.").not());
}

#[rstest]
#[case("")]
#[case("   ")]
fn commit_with_blank_message_fails(init_repository_dir: TempDir, #[case] message: &str) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("wug.txt"), NOT_WUG.to_string()));
    run_sprig_command(dir, &["add", "wug.txt"]).assert().success();

    sprig_commit(dir, message)
        .assert()
        .code(1)
        .stdout("No message associated with this commit, please enter a message\n");
}

#[rstest]
fn commit_without_message_is_a_usage_error(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["commit"])
        .assert()
        .code(1);
}
