//! Template discovery and per-file processing.
//! Finds the `*.xml` templates in the input folder and writes each one,
//! substituted, to the output folder under the same file name.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    constants::TEMPLATE_EXTENSION,
    error::{Error, Result},
    template::{placeholder, Bindings, Substituter},
};

/// Returns true if the file name marks a template.
pub fn is_template_file(filename: &str) -> bool {
    filename.ends_with(TEMPLATE_EXTENSION)
}

/// Lists the templates directly inside `input_folder`, sorted by file name.
///
/// Subfolders are not searched.
///
/// # Errors
/// * `Error::NoTemplatesFound` if the folder holds no template
/// * `Error::IoError` if the folder cannot be listed
pub fn find_templates<P: AsRef<Path>>(input_folder: P) -> Result<Vec<PathBuf>> {
    let input_folder = input_folder.as_ref();
    let mut templates = Vec::new();

    for entry in WalkDir::new(input_folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| Error::IoError(io::Error::from(e)))?;
        // Follows links, so symlinked templates count.
        if !entry.path().is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_template_file) {
            templates.push(entry.into_path());
        }
    }

    debug!("{} XML files found in input folder", templates.len());

    if templates.is_empty() {
        return Err(Error::NoTemplatesFound {
            input_folder: input_folder.display().to_string(),
        });
    }
    Ok(templates)
}

/// Creates the output folder, including intermediate directories.
pub fn ensure_output_dir<P: AsRef<Path>>(output_folder: P) -> Result<()> {
    let output_folder = output_folder.as_ref();
    if !output_folder.exists() {
        debug!("Creating output folder {}", output_folder.display());
        fs::create_dir_all(output_folder)?;
    }
    Ok(())
}

/// Target path for a template inside the output folder.
pub fn resolve_target_path<P: AsRef<Path>>(template: &Path, output_folder: P) -> Result<PathBuf> {
    let filename = template.file_name().ok_or_else(|| {
        Error::IoError(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", template.display()),
        ))
    })?;
    Ok(output_folder.as_ref().join(filename))
}

/// Reads one template, substitutes it and writes the result.
///
/// Existing output files are overwritten.
pub fn process_template<P: AsRef<Path>>(
    template: &Path,
    output_folder: P,
    substituter: &Substituter,
) -> Result<PathBuf> {
    debug!("Replacing placeholders in {}", template.display());
    let content = fs::read_to_string(template)?;

    for name in substituter.unresolved(&content) {
        warn!(
            "{} has no value in this environment, left as-is in {}",
            placeholder(&name),
            template.display()
        );
    }

    let target = resolve_target_path(template, output_folder)?;
    debug!("Writing policy file {}", target.display());
    fs::write(&target, substituter.substitute(&content))?;
    Ok(target)
}

/// Processes every template in order, stopping at the first failure.
///
/// Files written before a failure stay on disk.
pub fn process_templates<P: AsRef<Path>>(
    templates: &[PathBuf],
    output_folder: P,
    bindings: &Bindings,
) -> Result<Vec<PathBuf>> {
    let output_folder = output_folder.as_ref();
    let substituter = Substituter::new(bindings);
    ensure_output_dir(output_folder)?;

    templates
        .iter()
        .map(|template| process_template(template, output_folder, &substituter))
        .collect()
}
