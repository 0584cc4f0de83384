use crate::common::command::{commit_file, init_repository_dir, run_sprig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::itself("master", "Cannot merge a branch with itself\n")]
#[case::unknown("ghost", "The branch <ghost> does not exist\n")]
fn merge_with_invalid_branch_fails(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_sprig_command(init_repository_dir.path(), &["--yes", "merge", branch])
        .assert()
        .code(1)
        .stdout(message.to_string());
}

#[rstest]
fn merge_with_same_head_is_up_to_date(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "cool-beans"])
        .assert()
        .success();

    run_sprig_command(dir, &["--yes", "merge", "cool-beans"])
        .assert()
        .code(1)
        .stdout("The branch is already up-to-date\n");
}

#[rstest]
fn merge_with_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_sprig_command(dir, &["branch", "cool-beans"])
        .assert()
        .success();
    commit_file(dir, "hug.txt", "hug", "added hug");
    write_file(FileSpec::new(dir.join("bug.txt"), "bug".to_string()));
    run_sprig_command(dir, &["add", "bug.txt"]).assert().success();
    run_sprig_command(dir, &["rm", "wug.txt"]).assert().success();

    run_sprig_command(dir, &["--yes", "merge", "cool-beans"])
        .assert()
        .code(1)
        .stdout(
            "error: Your local changes to the following files will be overwritten by merge\n\
             bug.txt\n\
             wug.txt\n\
             Please commit your changes or stash them before you can merge\n",
        );
}
