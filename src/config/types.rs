use std::path::{
    Component,
    Path,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Name of the optional settings file in the module root.
pub const SETTINGS_FILE_NAME: &str = ".more-achievements.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "dataDirectory")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },
}

/// One numbered line per validation error.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImporterSettings {
    /// Emit informational and warning messages. Errors are always logged.
    pub debug: bool,

    /// Achievement data directory, relative to the module root.
    pub data_directory: String,

    /// Locales root directory, relative to the module root.
    /// Holds one subdirectory per language code.
    pub locales_directory: String,

    /// Process directory entries in lexicographic file-name order.
    /// When `false`, the platform listing order is used as-is.
    pub sort_files: bool,

    /// Prefix of every log line.
    pub log_prefix: String,
}

impl ImporterSettings {
    /// # Errors
    /// - Directory is empty, absolute, or escapes the module root
    /// - Log prefix is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, value) in
            [("dataDirectory", &self.data_directory), ("localesDirectory", &self.locales_directory)]
        {
            if let Some(message) = check_module_relative(value) {
                errors.push(ValidationError::new(field, message));
            }
        }

        if self.log_prefix.trim().is_empty() {
            errors.push(ValidationError::new(
                "logPrefix",
                "The prefix cannot be empty. Example: \"MoreAchievements\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Returns a message when `dir` is not a plain path below the module root.
fn check_module_relative(dir: &str) -> Option<String> {
    if dir.is_empty() {
        return Some("The directory cannot be empty. Example: \"db/data\"".to_string());
    }

    let path = Path::new(dir);
    if path.has_root() || path.is_absolute() {
        return Some(format!("Absolute path '{dir}' is not allowed; use a path relative to the module root"));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Some(format!("Path '{dir}' must not leave the module root ('..' is not allowed)"));
    }

    None
}

impl Default for ImporterSettings {
    fn default() -> Self {
        Self {
            debug: true,
            data_directory: "db/data".to_string(),
            locales_directory: "db/locales".to_string(),
            sort_files: true,
            log_prefix: "MoreAchievements".to_string(),
        }
    }
}
