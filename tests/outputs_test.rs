use std::fs;
use std::path::PathBuf;

use policy_templater::outputs::{error_annotation, report_success, set_output};
use policy_templater::runner::RunSummary;
use tempfile::TempDir;

#[test]
fn test_set_output_appends() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("github_output");
    fs::write(&output_file, "previous=1\n").unwrap();

    set_output("name", "value", Some(output_file.as_path())).unwrap();

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "previous=1\nname=value\n"
    );
}

#[test]
fn test_report_success() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("github_output");
    let summary = RunSummary {
        environment: "prod".to_string(),
        written: vec![PathBuf::from("out/policy.xml")],
    };

    report_success(&summary, Some(output_file.as_path())).unwrap();

    assert_eq!(fs::read_to_string(&output_file).unwrap(), "result=success\n");
}

#[test]
fn test_set_output_without_file() {
    assert!(set_output("result", "success", None).is_ok());
}

#[test]
fn test_error_annotation() {
    assert_eq!(error_annotation("boom"), "::error::boom");
    assert_eq!(
        error_annotation("line one\nline two 100%"),
        "::error::line one%0Aline two 100%25"
    );
}
