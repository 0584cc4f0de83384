use crate::common::command::{WUG, init_repository_dir, run_sprig_command, sprig_commit};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn removed_file_is_dropped_by_the_next_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_sprig_command(dir, &["rm", "wug.txt"])
        .assert()
        .success()
        .stdout("");
    run_sprig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\nOn branch master\n\n=== Files Marked for Removal ===\nwug.txt\n\n",
        );

    sprig_commit(dir, "removed wug").assert().success();

    // the working copy survives, but the head no longer tracks it
    assert_eq!(read_file(&dir.join("wug.txt")), WUG);
    assert!(!dir.join(".sprig").join("2").join("wug.txt").exists());
    run_sprig_command(dir, &["checkout", "wug.txt"])
        .assert()
        .code(1)
        .stdout("File does not exist in the most recent commit, or no such branch exists\n");
}

#[rstest]
fn removing_an_untracked_file_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hug.txt"), "hug".to_string()));

    run_sprig_command(dir, &["rm", "hug.txt"])
        .assert()
        .code(1)
        .stdout("No reason to remove the file <hug.txt>\n");
}

#[rstest]
fn removing_a_staged_file_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hug.txt"), "hug".to_string()));
    run_sprig_command(dir, &["add", "hug.txt"]).assert().success();

    run_sprig_command(dir, &["rm", "hug.txt"]).assert().success();

    run_sprig_command(dir, &["status"])
        .assert()
        .success()
        .stdout("=== Branches ===\nOn branch master\n\nNothing to commit. Working directory clean\n");
}
