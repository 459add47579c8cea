//! Settings document handling.
//! Loads `appsettings.json` from the input folder and resolves the
//! environment record a run is targeting.
//!
//! Only the selected environment is typed. Other records are kept as raw
//! JSON and only need a `Name` to be compared against.

use crate::constants::SETTINGS_FILE;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// Top-level shape of `appsettings.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsDocument {
    /// Environment records in document order, untyped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub environments: Vec<Value>,
}

/// One named deployment target.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "truthy")]
    pub production: bool,
    #[serde(default, deserialize_with = "string_or_none")]
    pub tenant: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub policy_settings: IndexMap<String, String>,
}

impl EnvironmentRecord {
    /// Tenant value, treating an empty string the same as an absent one.
    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref().filter(|t| !t.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_str()
        .map(str::to_string))
}

/// Name of a raw environment entry, if it has a string one.
fn record_name(entry: &Value) -> Option<&str> {
    entry.get("Name").and_then(Value::as_str)
}

/// Parses the text of a settings document.
///
/// # Errors
/// * `Error::ConfigReadFailure` if the text is not JSON of the expected shape,
///   or is the JSON literal `null`
pub fn parse_settings(content: &str) -> Result<SettingsDocument> {
    let document: Option<SettingsDocument> =
        serde_json::from_str(content).map_err(|e| Error::ConfigReadFailure(e.to_string()))?;
    document.ok_or_else(|| Error::ConfigReadFailure("document is empty".to_string()))
}

/// Reads and parses `appsettings.json` from the given folder.
///
/// # Errors
/// * `Error::ConfigReadFailure` if the file is missing, unreadable or invalid
pub fn load_settings<P: AsRef<Path>>(input_folder: P) -> Result<SettingsDocument> {
    let settings_path = input_folder.as_ref().join(SETTINGS_FILE);
    debug!("Loading settings from {}", settings_path.display());

    let content = std::fs::read_to_string(&settings_path)
        .map_err(|e| Error::ConfigReadFailure(format!("{}: {}", settings_path.display(), e)))?;
    parse_settings(&content)
}

/// Selects the environment record named `requested_name`.
///
/// Matching is exact and case-sensitive. When several records share the
/// name the first one wins. Entries that are not objects or carry no
/// string `Name` are skipped.
///
/// # Errors
/// * `Error::ConfigMissing` if the document lists no environments
/// * `Error::EnvironmentNotFound` if no record carries the name
/// * `Error::ConfigReadFailure` if the matching record's policy settings
///   are not a string to string map
/// * `Error::TenantMissing` if the matching record has no tenant
pub fn resolve(document: &SettingsDocument, requested_name: &str) -> Result<EnvironmentRecord> {
    if document.environments.is_empty() {
        return Err(Error::ConfigMissing);
    }

    let entry = document
        .environments
        .iter()
        .find(|entry| record_name(entry) == Some(requested_name))
        .ok_or_else(|| Error::EnvironmentNotFound {
            name: requested_name.to_string(),
        })?;

    let record = EnvironmentRecord::deserialize(entry).map_err(|e| {
        Error::ConfigReadFailure(format!("environment \"{}\": {}", requested_name, e))
    })?;

    if record.tenant().is_none() {
        return Err(Error::TenantMissing {
            name: requested_name.to_string(),
        });
    }

    debug!(
        "Resolved environment {} (production: {}, {} policy settings)",
        record.name,
        record.production,
        record.policy_settings.len()
    );
    Ok(record)
}
