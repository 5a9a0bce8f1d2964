//! Integration tests for tags command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{quill_cmd, write_post};

#[test]
fn test_tags_no_tags_found() {
    let temp = TempDir::new().unwrap();

    quill_cmd().arg("init").arg(temp.path()).assert().success();

    quill_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_tags_counts_sorted_by_frequency() {
    let temp = TempDir::new().unwrap();

    quill_cmd().arg("init").arg(temp.path()).assert().success();
    write_post(temp.path(), "a.md", "A", "2024-01-01", &["go"]);
    write_post(temp.path(), "b.md", "B", "2024-03-01", &["go", "rust"]);

    let output = quill_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["#go (2)", "#rust (1)"]);
}

#[test]
fn test_tags_equal_counts_sorted_by_name() {
    let temp = TempDir::new().unwrap();

    quill_cmd().arg("init").arg(temp.path()).assert().success();
    write_post(temp.path(), "a.md", "A", "2024-01-01", &["zsh", "bash"]);

    let output = quill_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["#bash (1)", "#zsh (1)"]);
}

#[test]
fn test_tags_are_case_sensitive() {
    let temp = TempDir::new().unwrap();

    quill_cmd().arg("init").arg(temp.path()).assert().success();
    write_post(temp.path(), "a.md", "A", "2024-01-01", &["Rust"]);
    write_post(temp.path(), "b.md", "B", "2024-02-01", &["rust"]);

    let output = quill_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("#Rust (1)"));
    assert!(stdout.contains("#rust (1)"));
}

#[test]
fn test_tags_top_truncates() {
    let temp = TempDir::new().unwrap();

    quill_cmd().arg("init").arg(temp.path()).assert().success();
    write_post(temp.path(), "a.md", "A", "2024-01-01", &["go", "rust", "cli"]);
    write_post(temp.path(), "b.md", "B", "2024-02-01", &["go"]);

    let output = quill_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .arg("--top")
        .arg("1")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["#go (2)"]);
}

#[test]
fn test_tags_top_larger_than_aggregate() {
    let temp = TempDir::new().unwrap();

    quill_cmd().arg("init").arg(temp.path()).assert().success();
    write_post(temp.path(), "a.md", "A", "2024-01-01", &["solo"]);

    let output = quill_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .arg("--top")
        .arg("10")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["#solo (1)"]);
}
