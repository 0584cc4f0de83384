use crate::common::command::{repository_dir, run_sprig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::status(&["status"])]
#[case::log(&["log"])]
#[case::branch(&["branch", "cool-beans"])]
#[case::checkout(&["checkout"])]
fn commands_require_an_initialized_repository(repository_dir: TempDir, #[case] args: &[&str]) {
    run_sprig_command(repository_dir.path(), args)
        .assert()
        .code(1)
        .stdout("Not in an initialized sprig directory.\n");

    assert!(!repository_dir.path().join(".sprig").exists());
}

#[rstest]
fn missing_command_is_reported(repository_dir: TempDir) {
    run_sprig_command(repository_dir.path(), &[])
        .assert()
        .code(1)
        .stdout("No command detected.\n");
}

#[rstest]
#[case("rebase")]
#[case("stash")]
#[case("i-rebase")]
fn unknown_command_is_reported(repository_dir: TempDir, #[case] command: &str) {
    run_sprig_command(repository_dir.path(), &[command, "master"])
        .assert()
        .code(1)
        .stdout("Unrecognized command.\n");
}
