//! policy-templater fills `{Settings:<Name>}` placeholders in policy files.
//! It selects one environment from `appsettings.json`, binds its tenant and
//! policy settings, and writes substituted copies of every `*.xml` template.

/// Command-line interface and run inputs
pub mod cli;

/// Settings document loading and environment resolution
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Logger setup
pub mod logger;

/// Step output and failure reporting for CI runners
pub mod outputs;

/// Template discovery and per-file processing
pub mod processor;

/// Run orchestration
pub mod runner;

/// Placeholder substitution
pub mod template;
