//! Source loader: failure reasons and successful reads.

use std::fs;
use std::path::Path;

use scanlet::{Outcome, SourceFile, read_source_file};
use tempfile::TempDir;

fn reason(outcome: Outcome<SourceFile, String>) -> String {
    match outcome {
        Outcome::Failure(reason) => reason,
        Outcome::Ok(file) => panic!("expected failure, loaded {}", file.file_path()),
    }
}

#[test]
fn test_new_source_file_keeps_fields() {
    let file = SourceFile::new("repl://1", "unit test");

    assert_eq!(file.file_path(), "repl://1");
    assert_eq!(file.file_contents(), "unit test");
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("non-existing-file.txt");

    let outcome = read_source_file(&missing);

    assert_eq!(outcome.tag(), "failure");
    assert_eq!(
        reason(outcome),
        format!("File \"{}\" does not exists", missing.display())
    );
}

#[test]
fn test_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let directory = temp_dir.path();

    assert_eq!(
        reason(read_source_file(directory)),
        format!("The path \"{}\" does not point to a file", directory.display())
    );
}

#[test]
fn test_working_directory_is_a_directory() {
    let cwd = std::env::current_dir().expect("working directory");

    assert_eq!(
        reason(read_source_file("./")),
        format!("The path \"{}\" does not point to a file", cwd.display())
    );
}

#[cfg(unix)]
#[test]
fn test_non_readable_file_fails() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join("non_readable_file.txt");
    fs::write(&file_path, "hidden").expect("Failed to write test file");
    fs::set_permissions(&file_path, fs::Permissions::from_mode(0o000))
        .expect("Failed to restrict permissions");

    assert_eq!(
        reason(read_source_file(&file_path)),
        format!(
            "File \"{}\" is not readable by the current user",
            file_path.display()
        )
    );
}

#[test]
fn test_empty_readable_file_loads() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join("readable_file.txt");
    fs::write(&file_path, "").expect("Failed to write test file");

    let outcome = read_source_file(&file_path);

    assert_eq!(outcome.tag(), "ok");
    let file = outcome.into_value().expect("file should load");
    assert_eq!(file.file_path(), file_path.to_string_lossy());
    assert_eq!(file.file_contents(), "");
    assert!(file.is_empty());
    assert!(Path::new(file.file_path()).is_absolute());
}

#[test]
fn test_loaded_outcome_serializes_with_tag() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join("unit.src");
    fs::write(&file_path, "a\nb").expect("Failed to write test file");

    let value = serde_json::to_value(read_source_file(&file_path)).expect("should serialize");

    assert!(scanlet::is_ok(&value));
    assert_eq!(value["value"]["file_contents"], "a\nb");
}
