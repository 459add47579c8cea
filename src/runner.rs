//! Run orchestration.
//! Wires settings loading, environment resolution and template processing
//! into one pass over the input folder.

use log::{debug, info};
use std::path::PathBuf;

use crate::{
    cli::Inputs,
    config::{load_settings, resolve},
    error::Result,
    processor::{find_templates, process_templates},
    template::Bindings,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub environment: String,
    pub written: Vec<PathBuf>,
}

/// Executes one run.
///
/// # Flow
/// 1. Loads `appsettings.json` from the input folder
/// 2. Resolves the requested environment
/// 3. Discovers the templates
/// 4. Creates the output folder and writes each substituted template
///
/// Nothing is written before step 4, so a run failing validation leaves
/// the output folder untouched.
pub fn run(inputs: &Inputs) -> Result<RunSummary> {
    let document = load_settings(&inputs.input_folder)?;
    let record = resolve(&document, &inputs.environment)?;

    let bindings = Bindings::from_environment(&record);
    debug!(
        "Environment {} binds {} placeholders",
        inputs.environment,
        bindings.len()
    );

    let templates = find_templates(&inputs.input_folder)?;
    let written = process_templates(&templates, &inputs.output_folder, &bindings)?;

    info!("Wrote {} policies to output folder", written.len());
    Ok(RunSummary {
        environment: inputs.environment.clone(),
        written,
    })
}
