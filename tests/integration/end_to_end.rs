use predicates::prelude::*;
use tlocc_domain::ExtensionKey;

use crate::common::{Project, compact, entry};

fn sample_project() -> Project {
    let project = Project::new();
    project.write("src/main/a.txt", "first\n\nthird\n");
    let go = "package b\nfunc A() {}\nfunc B() {}\nfunc C() {}\n// end\n";
    project.write("src/main/pkg/b.go", go);
    project
}

#[test]
fn exact_counting_reports_every_line() {
    let project = sample_project();
    project.command().assert().success();

    let report = compact(&project.report());
    assert!(report.starts_with(r#"<?xmlversion="1.0"encoding="UTF-8"?><map>"#));
    assert!(report.contains(&entry(".txt", 1, 1, 3)));
    assert!(report.contains(&entry(".go", 1, 0, 5)));
    assert_eq!(report.matches("<entry>").count(), 2);
}

#[test]
fn legacy_counting_drops_the_last_line() {
    let project = sample_project();
    project
        .command()
        .args(["--counting", "legacy"])
        .assert()
        .success();

    let report = compact(&project.report());
    assert!(report.contains(&entry(".txt", 1, 1, 2)));
    assert!(report.contains(&entry(".go", 1, 0, 4)));
}

#[test]
fn entries_are_sorted_by_extension() {
    let project = sample_project();
    project.command().assert().success();

    let report = project.report();
    let go = report.find("<string>.go</string>").expect(".go entry");
    let txt = report.find("<string>.txt</string>").expect(".txt entry");
    assert!(go < txt);
}

#[test]
fn logs_one_line_per_file() {
    let project = sample_project();
    let txt_line = predicate::str::is_match(r"1\t3\t[^\n]*a\.txt").expect("regex");
    let go_line = predicate::str::is_match(r"0\t5\t[^\n]*b\.go").expect("regex");
    project
        .command()
        .assert()
        .success()
        .stderr(txt_line)
        .stderr(go_line);
}

#[test]
fn quiet_mode_hides_per_file_lines() {
    let project = sample_project();
    project
        .command()
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::contains("a.txt").not());
    assert!(project.report_path().exists());
}

#[test]
fn test_sources_are_counted_into_the_same_buckets() {
    let project = sample_project();
    project.write("src/test/ATest.txt", "one\ntwo\n");
    let gemfile = project.write("src/test/Gemfile", "gem 'rake'\n\n");
    project.command().assert().success();

    let report = compact(&project.report());
    assert!(report.contains(&entry(".txt", 2, 1, 5)));
    let key = ExtensionKey::from_path(&gemfile);
    assert!(report.contains(&entry(key.as_str(), 1, 1, 2)));
}

#[test]
fn dot_files_and_dotted_directories() {
    let project = Project::new();
    project.write("src/main/.gitignore", "target\n");
    project.write("src/main/v1.2/README", "hello\n");
    project.command().assert().success();

    let report = compact(&project.report());
    assert!(report.contains(&entry(".gitignore", 1, 0, 1)));
    assert!(report.contains(&entry(".2/README", 1, 0, 1)));
}

#[test]
fn dotted_project_directory_keys_files_without_extension() {
    let project = Project::new();
    project.write("my.project/src/main/Makefile", "all:\n");
    project.write("my.project/src/main/App.java", "class App {}\n");
    project
        .command()
        .args(["--source-dir", "my.project/src/main"])
        .assert()
        .success();

    let report = compact(&project.report());
    assert!(report.contains(&entry(".project/src/main/Makefile", 1, 0, 1)));
    assert!(report.contains(&entry(".java", 1, 0, 1)));
    assert!(!report.contains("<string>undefined</string>"));
}

#[test]
fn empty_source_tree_writes_an_empty_map() {
    let project = Project::new();
    std::fs::create_dir_all(project.path().join("src/main")).expect("mkdir");
    project.command().assert().success();

    let expected = r#"<?xmlversion="1.0"encoding="UTF-8"?><map></map>"#;
    assert_eq!(compact(&project.report()), expected);
}

#[test]
fn report_uses_requested_encoding() {
    let project = Project::new();
    project.write("src/main/caf\u{e9}.caf\u{e9}", b"x\n".as_slice());
    project
        .command()
        .args(["--encoding", "latin1"])
        .assert()
        .success();

    let bytes = std::fs::read(project.report_path()).expect("report");
    let decl = br#"<?xml version="1.0" encoding="windows-1252"?>"#;
    assert!(bytes.starts_with(decl));
    assert!(bytes.windows(5).any(|w| w == b".caf\xE9"));
}

#[test]
fn rerun_overwrites_previous_report() {
    let project = sample_project();
    project.command().assert().success();
    project.write("src/main/c.rs", "fn main() {}\n");
    project.command().assert().success();

    assert!(compact(&project.report()).contains(&entry(".rs", 1, 0, 1)));
}
