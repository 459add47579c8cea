use std::io;

use policy_templater::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::EnvironmentNotFound {
        name: "staging".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Environment \"staging\" was not found in Environments of appsettings.json"
    );

    let err = Error::ConfigMissing;
    assert_eq!(err.to_string(), "No Environments specified in appsettings.json");

    let err = Error::MissingParameter("environment");
    assert_eq!(err.to_string(), "A parameter is missing: environment");

    let err = Error::IoError(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(err.to_string(), "IO error: denied");
}
