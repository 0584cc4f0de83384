use crate::common::command::{commit_file, init_repository_dir, run_sprig_command, sprig_commit};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// master: 0 - 1 - 2 - 3, cool-beans: 2 - 4
///
/// master rewrites wug.txt; cool-beans rewrites it differently, drops
/// notwug.txt and adds hug.txt.
#[fixture]
fn diverged_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();
    commit_file(dir, "notwug.txt", "notwug", "added notwug");
    run_sprig_command(dir, &["branch", "cool-beans"])
        .assert()
        .success();
    commit_file(dir, "wug.txt", "master wug", "master wug");

    run_sprig_command(dir, &["checkout", "cool-beans"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("wug.txt"), "cool wug".to_string()));
    write_file(FileSpec::new(dir.join("hug.txt"), "hug".to_string()));
    run_sprig_command(dir, &["add", "wug.txt", "hug.txt"])
        .assert()
        .success();
    run_sprig_command(dir, &["rm", "notwug.txt"])
        .assert()
        .success();
    sprig_commit(dir, "cool wug").assert().success();

    run_sprig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    init_repository_dir
}

#[rstest]
fn merge_writes_conflicts_next_to_our_version(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();

    run_sprig_command(dir, &["--yes", "merge", "cool-beans"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict in <wug.txt>, their version is in <wug.txt.conflicted>\n");

    assert_eq!(read_file(&dir.join("wug.txt")), "master wug");
    assert_eq!(read_file(&dir.join("wug.txt.conflicted")), "cool wug");
    assert_eq!(read_file(&dir.join("hug.txt")), "hug");
    assert!(!dir.join("notwug.txt").exists());
}

#[rstest]
fn merged_files_are_tracked_by_the_head(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    run_sprig_command(dir, &["--yes", "merge", "cool-beans"])
        .assert()
        .success();
    std::fs::remove_file(dir.join("hug.txt")).unwrap();

    run_sprig_command(dir, &["checkout", "hug.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("hug.txt")), "hug");

    run_sprig_command(dir, &["checkout", "wug.txt.conflicted"])
        .assert()
        .code(1)
        .stdout("File does not exist in the most recent commit, or no such branch exists\n");
}

#[rstest]
fn merge_asks_before_touching_the_working_tree(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();

    run_sprig_command(dir, &["merge", "cool-beans"])
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stdout(
            "This operation might add, remove and modify some files in the working directory\n\
             Do you want to continue, Y / N ?\n\
             Operation aborted\n",
        );

    assert!(!dir.join("hug.txt").exists());
    assert!(!dir.join("wug.txt.conflicted").exists());
    assert_eq!(read_file(&dir.join("notwug.txt")), "notwug");
}
