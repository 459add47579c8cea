//! Reporting run results to the invoking CI runner.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::constants::RESULT_OUTPUT;
use crate::error::Result;
use crate::runner::RunSummary;

/// Returns true when the process runs as a CI workflow step.
pub fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Formats a workflow error annotation.
pub fn error_annotation(message: &str) -> String {
    // Annotations end at the first newline unless it is escaped.
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{}", escaped)
}

/// Publishes a step output.
///
/// Appends `name=value` to the step output file when one is configured,
/// otherwise prints it to stdout.
pub fn set_output(name: &str, value: &str, github_output: Option<&Path>) -> Result<()> {
    let line = format!("{}={}", name, value);
    match github_output {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}", line)?;
        }
        None => println!("{}", line),
    }
    Ok(())
}

/// Publishes `result=success` for a finished run.
pub fn report_success(summary: &RunSummary, github_output: Option<&Path>) -> Result<()> {
    log::debug!(
        "Environment {} produced {} files",
        summary.environment,
        summary.written.len()
    );
    set_output(RESULT_OUTPUT, "success", github_output)
}
