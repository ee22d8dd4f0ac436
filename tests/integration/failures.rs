use predicates::prelude::*;

use crate::common::{Project, compact, entry};

#[test]
fn missing_source_directory_fails_without_report() {
    let project = Project::new();
    project
        .command()
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Source directory")
                .and(predicate::str::contains("is not valid")),
        );
    assert!(!project.report_path().exists());
}

#[test]
fn missing_test_directory_is_only_a_warning() {
    let project = Project::new();
    project.write("src/main/a.txt", "a\n");
    project
        .command()
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"));

    assert!(compact(&project.report()).contains(&entry(".txt", 1, 0, 1)));
}

#[test]
fn undecodable_file_counts_as_zero_but_is_still_a_file() {
    let project = Project::new();
    project.write("src/main/a.txt", "a\n");
    project.write("src/main/blob.bin", b"ok\n\xC3\x28\n".as_slice());
    project
        .command()
        .assert()
        .success()
        .stderr(predicate::str::contains("blob.bin"));

    let report = compact(&project.report());
    assert!(report.contains(&entry(".bin", 1, 0, 0)));
    assert!(report.contains(&entry(".txt", 1, 0, 1)));
}

#[test]
fn output_directory_blocked_by_a_file_fails() {
    let project = Project::new();
    project.write("src/main/a.txt", "a\n");
    project.write("target", "not a directory");
    project.command().assert().code(1);
}
