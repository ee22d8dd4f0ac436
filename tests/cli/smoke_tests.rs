use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Project;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_tlocc"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tlocc"))
        .stdout(predicate::str::contains("--source-dir"))
        .stdout(predicate::str::contains("--counting"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_tlocc"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_counting_mode() {
    Project::new()
        .command()
        .args(["--counting", "fuzzy"])
        .assert()
        .failure();
}

#[test]
fn unknown_encoding_exits_with_config_status() {
    let project = Project::new();
    project.write("src/main/a.txt", "x\n");
    project
        .command()
        .args(["--encoding", "klingon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("klingon"));
    assert!(!project.report_path().exists());
}

#[test]
fn unreadable_config_file_exits_with_config_status() {
    let project = Project::new();
    project.write("src/main/a.txt", "x\n");
    project
        .command()
        .args(["--config", "missing.json"])
        .assert()
        .code(2);
}
