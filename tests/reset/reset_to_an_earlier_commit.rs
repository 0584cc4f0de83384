use crate::common::command::{NOT_WUG, WUG, commit_file, init_repository_dir, run_sprig_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

fn logged_ids(dir: &std::path::Path) -> Vec<String> {
    let output = run_sprig_command(dir, &["log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    Regex::new(r"Commit (\d+)\.")
        .unwrap()
        .captures_iter(&output)
        .map(|captures| captures[1].to_string())
        .collect()
}

#[rstest]
fn reset_then_commit_leaves_old_commits_behind(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "wug.txt", NOT_WUG, "changed wug");
    commit_file(dir, "hug.txt", "hug", "added hug");

    run_sprig_command(dir, &["reset", "1"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.join("wug.txt")), WUG);
    assert!(!dir.join("hug.txt").exists());

    commit_file(dir, "bug.txt", "bug", "after reset");

    assert_eq!(logged_ids(dir), vec!["4", "1", "0"]);
    // reset commits are still in the global log
    run_sprig_command(dir, &["find", "changed wug"])
        .assert()
        .success()
        .stdout("The id of the commit is: 2\n");
}

#[rstest]
fn reset_to_a_commit_of_another_branch_fails(init_repository_dir: TempDir) {
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

    run_sprig_command(dir, &["reset", "2"])
        .assert()
        .code(1)
        .stdout("This commit is not from the current branch\n");
}

#[rstest]
#[case("42", "No such commit exists\n")]
#[case("abc", "<abc> is not a commit id\n")]
fn reset_to_an_unknown_commit_fails(
    init_repository_dir: TempDir,
    #[case] id: &str,
    #[case] message: &str,
) {
    run_sprig_command(init_repository_dir.path(), &["reset", id])
        .assert()
        .code(1)
        .stdout(message.to_string());
}
