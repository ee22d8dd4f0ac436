use crate::common::{Project, compact, entry};

#[test]
fn directories_can_be_moved_with_flags() {
    let project = Project::new();
    project.write("code/a.txt", "a\nb\n");
    project
        .command()
        .args([
            "--source-dir",
            "code",
            "--test-source-dir",
            "checks",
            "--output-dir",
            "out",
        ])
        .assert()
        .success();

    let report_path = project.path().join("out/tlocc-result.xml");
    let report = std::fs::read_to_string(report_path).expect("report");
    assert!(compact(&report).contains(&entry(".txt", 1, 0, 2)));
}

#[test]
fn environment_variables_are_honoured() {
    let project = Project::new();
    project.write("src/main/a.txt", "a\nb\n");
    project
        .command()
        .env("TLOCC_COUNTING", "legacy")
        .assert()
        .success();

    assert!(compact(&project.report()).contains(&entry(".txt", 1, 0, 1)));
}

#[test]
fn json_config_file_supplies_options() {
    let project = Project::new();
    project.write("code/a.txt", "a\n\nb\n");
    let config = r#"{ "sourceDirectory": "code", "counting": "legacy" }"#;
    project.write("tlocc.json", config);
    project
        .command()
        .args(["--config", "tlocc.json"])
        .assert()
        .success();

    assert!(compact(&project.report()).contains(&entry(".txt", 1, 1, 2)));
}

#[test]
fn yaml_config_file_is_overridden_by_flags() {
    let project = Project::new();
    project.write("code/a.txt", "a\n\nb\n");
    project.write("tlocc.yaml", "sourceDirectory: code\ncounting: legacy\n");
    project
        .command()
        .args(["--config", "tlocc.yaml", "--counting", "exact"])
        .assert()
        .success();

    assert!(compact(&project.report()).contains(&entry(".txt", 1, 1, 3)));
}
