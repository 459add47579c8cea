//! Command-line interface implementation for policy-templater.
//! Provides argument parsing using clap, with environment variable fallbacks
//! matching the way CI runners hand inputs to a step.

use clap::{builder::BoolishValueParser, Parser};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Command-line arguments structure for policy-templater.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fill {Settings:*} placeholders in policy files from an environment in appsettings.json",
    long_about = None
)]
pub struct Args {
    /// Name of the environment to select from appsettings.json
    #[arg(short, long, value_name = "NAME", env = "INPUT_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Folder holding appsettings.json and the *.xml templates
    #[arg(short, long, value_name = "DIR", env = "INPUT_INPUTFOLDER")]
    pub input_folder: Option<String>,

    /// Folder the substituted files are written to
    #[arg(short, long, value_name = "DIR", env = "INPUT_OUTPUTFOLDER")]
    pub output_folder: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long, env = "RUNNER_DEBUG", value_parser = BoolishValueParser::new())]
    pub verbose: bool,

    /// File receiving step outputs
    #[arg(long, value_name = "FILE", env = "GITHUB_OUTPUT", hide = true)]
    pub github_output: Option<PathBuf>,
}

/// Validated run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub environment: String,
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
}

fn required(value: &Option<String>, name: &'static str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::MissingParameter(name)),
    }
}

impl Args {
    /// Checks that every run input is present and non-empty.
    ///
    /// # Errors
    /// * `Error::MissingParameter` naming the first absent input
    pub fn inputs(&self) -> Result<Inputs> {
        Ok(Inputs {
            environment: required(&self.environment, "environment")?,
            input_folder: PathBuf::from(required(&self.input_folder, "inputFolder")?),
            output_folder: PathBuf::from(required(&self.output_folder, "outputFolder")?),
        })
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for malformed arguments
pub fn get_args() -> Args {
    Args::parse()
}
