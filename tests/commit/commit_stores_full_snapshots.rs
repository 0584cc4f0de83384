use crate::common::command::{NOT_WUG, WUG, commit_file, init_repository_dir};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_stores_snapshot_under_its_id(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let storage = dir.join(".sprig");

    assert_eq!(read_file(&storage.join("1").join("wug.txt")), WUG);

    commit_file(dir, "wug.txt", NOT_WUG, "changed wug");

    assert_eq!(read_file(&storage.join("2").join("wug.txt")), NOT_WUG);
    assert_eq!(read_file(&storage.join("1").join("wug.txt")), WUG);
}

#[rstest]
fn unchanged_files_are_carried_into_the_new_snapshot(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    commit_file(dir, "test_files/hug.txt", "hug", "added hug");

    let snapshot = dir.join(".sprig").join("2");
    assert_eq!(read_file(&snapshot.join("wug.txt")), WUG);
    assert_eq!(read_file(&snapshot.join("test_files").join("hug.txt")), "hug");
}
