// Contract tests for the `deno-scaffold` command line

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_create_with_default_name() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.current_dir(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Creating project deno-react-app..."))
        .stdout(predicate::str::contains("cd deno-react-app"));

    assert!(temp_dir.path().join("deno-react-app").join("src").is_dir());
}

#[test]
fn test_create_prints_follow_up_hints_in_order() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--name", "demo"]);

    cmd.assert()
        .success()
        .code(0)
        .stdout(predicate::eq(
            "Creating project demo...\n\
             Project created successfully!\n\
             Run the following commands to get started:\n\
             cd demo\n\
             deno task dev\n",
        ));
}

#[test]
fn test_create_accepts_single_dash_name_flag() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["-name", "legacy-style"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cd legacy-style"));

    assert!(temp_dir.path().join("legacy-style").join("deno.json").is_file());
}

#[test]
fn test_create_rejects_path_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let work_dir = temp_dir.path().join("work");
    fs::create_dir_all(&work_dir).unwrap();

    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.current_dir(&work_dir)
        .args(["--name", "../evil"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid project name '../evil'"));

    assert!(!temp_dir.path().join("evil").exists());
    assert_eq!(fs::read_dir(&work_dir).unwrap().count(), 0);
}

#[test]
fn test_create_rejects_empty_name() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--name", ""]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("project name cannot be empty"));
}

#[test]
fn test_create_blocked_root_reports_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("demo"), "occupied").unwrap();

    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.current_dir(temp_dir.path())
        .args(["--name", "demo"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Project created successfully!").not())
        .stderr(predicate::str::contains("Error creating directory demo:"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.arg("--force");

    cmd.assert()
        .failure()
        .code(2);
}

#[test]
fn test_help_lists_name_flag() {
    let mut cmd = Command::cargo_bin("deno-scaffold").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("deno-react-app"));
}
