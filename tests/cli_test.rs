use clap::Parser;
use policy_templater::cli::Args;
use policy_templater::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("policy-templater")];
    res.extend(args.iter().map(OsString::from));
    res
}

fn args(environment: Option<&str>, input: Option<&str>, output: Option<&str>) -> Args {
    Args {
        environment: environment.map(String::from),
        input_folder: input.map(String::from),
        output_folder: output.map(String::from),
        verbose: false,
        github_output: None,
    }
}

#[test]
fn test_long_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--environment",
        "prod",
        "--input-folder",
        "./policies",
        "--output-folder",
        "./out",
        "--verbose",
    ]))
    .unwrap();

    assert_eq!(parsed.environment.as_deref(), Some("prod"));
    assert_eq!(parsed.input_folder.as_deref(), Some("./policies"));
    assert_eq!(parsed.output_folder.as_deref(), Some("./out"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed =
        Args::try_parse_from(make_args(&["-e", "dev", "-i", "in", "-o", "out", "-v"])).unwrap();

    let inputs = parsed.inputs().unwrap();
    assert_eq!(inputs.environment, "dev");
    assert_eq!(inputs.input_folder, PathBuf::from("in"));
    assert_eq!(inputs.output_folder, PathBuf::from("out"));
    assert!(parsed.verbose);
}

#[test]
fn test_positional_args_rejected() {
    assert!(Args::try_parse_from(make_args(&["prod", "in", "out"])).is_err());
}

#[test]
fn test_inputs_are_trimmed() {
    let inputs = args(Some(" prod "), Some("in "), Some(" out")).inputs().unwrap();
    assert_eq!(inputs.environment, "prod");
    assert_eq!(inputs.input_folder, PathBuf::from("in"));
    assert_eq!(inputs.output_folder, PathBuf::from("out"));
}

#[test]
fn test_missing_environment() {
    match args(None, Some("in"), Some("out")).inputs() {
        Err(Error::MissingParameter(name)) => assert_eq!(name, "environment"),
        other => panic!("Expected MissingParameter, got {:?}", other),
    }
}

#[test]
fn test_empty_folders() {
    match args(Some("prod"), Some(""), Some("out")).inputs() {
        Err(Error::MissingParameter(name)) => assert_eq!(name, "inputFolder"),
        other => panic!("Expected MissingParameter, got {:?}", other),
    }

    match args(Some("prod"), Some("in"), Some("   ")).inputs() {
        Err(Error::MissingParameter(name)) => assert_eq!(name, "outputFolder"),
        other => panic!("Expected MissingParameter, got {:?}", other),
    }
}

#[test]
fn test_empty_value_from_command_line() {
    let parsed =
        Args::try_parse_from(make_args(&["-e", "", "-i", "in", "-o", "out"])).unwrap();
    assert!(matches!(parsed.inputs(), Err(Error::MissingParameter("environment"))));
}
