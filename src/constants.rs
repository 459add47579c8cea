//! Common constants used throughout policy-templater.

/// Settings document looked up inside the input folder
pub const SETTINGS_FILE: &str = "appsettings.json";

/// Suffix a file name must carry to be treated as a template
pub const TEMPLATE_EXTENSION: &str = ".xml";

/// Reserved placeholder name bound to the environment's tenant
pub const TENANT_KEY: &str = "Tenant";

/// Opening part of every placeholder token
pub const PLACEHOLDER_PREFIX: &str = "{Settings:";

/// Closing part of every placeholder token
pub const PLACEHOLDER_SUFFIX: &str = "}";

/// Step output name carrying the run result
pub const RESULT_OUTPUT: &str = "result";
