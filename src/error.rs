//! Error handling for policy-templater.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

use crate::outputs;

/// All failures a run can end with.
///
/// Every variant is fatal: the run stops at the first one and the message
/// is reported to the invoking harness.
#[derive(Error, Debug)]
pub enum Error {
    /// A required run input was absent or empty.
    #[error("A parameter is missing: {0}")]
    MissingParameter(&'static str),

    /// The settings document could not be read or parsed.
    #[error("Unable to read appsettings.json in input folder: {0}")]
    ConfigReadFailure(String),

    /// The settings document lists no environments.
    #[error("No Environments specified in appsettings.json")]
    ConfigMissing,

    /// No environment record carries the requested name.
    #[error("Environment \"{name}\" was not found in Environments of appsettings.json")]
    EnvironmentNotFound { name: String },

    /// The resolved environment has an empty or absent tenant.
    #[error("Tenant not set in appsettings.json for environment \"{name}\"")]
    TenantMissing { name: String },

    /// The input folder holds no template files.
    #[error("No XML files found in input folder {input_folder}")]
    NoTemplatesFound { input_folder: String },

    /// Any read or write failure while discovering or processing templates.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the failure and exits the program.
///
/// # Behavior
/// Emits a workflow error annotation when running under a CI runner,
/// prints the message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    if outputs::running_in_actions() {
        println!("{}", outputs::error_annotation(&err.to_string()));
    }
    eprintln!("{}", err);
    std::process::exit(1);
}
