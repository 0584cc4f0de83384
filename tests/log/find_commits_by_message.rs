use crate::common::command::{commit_file, init_repository_dir, run_sprig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_prints_every_matching_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "hug.txt", "hug", "added wug");

    run_sprig_command(dir, &["find", "added wug"])
        .assert()
        .success()
        .stdout("The id of the commit is: 1\nThe id of the commit is: 2\n");
}

#[rstest]
fn find_matches_the_whole_message_only(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["find", "added"])
        .assert()
        .code(1)
        .stdout("No such commit message exists\n");
}
