use crate::common::command::{repository_dir, run_sprig_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_multiple_files_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_sprig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let files = write_generated_files(repository_dir.path(), 3);
    let names = files
        .iter()
        .map(|file| {
            file.path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    let mut args = vec!["add"];
    args.extend(names.iter().map(String::as_str));
    run_sprig_command(repository_dir.path(), &args)
        .assert()
        .success()
        .stdout("");

    let output = run_sprig_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let expected = format!(
        "=== Branches ===\nOn branch master\n\n=== Staged Files ===\n{}\n\n",
        names.join("\n")
    );
    assert_eq!(String::from_utf8(output)?, expected);

    Ok(())
}
