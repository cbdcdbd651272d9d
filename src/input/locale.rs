//! Locale string dictionaries: `<module>/db/locales/<lang>/*.json`, each a flat
//! JSON object of translation key to text.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use crate::error::ImportError;

/// Translation key -> localized text, read from one file.
pub type LocaleDictionary = HashMap<String, String>;

/// Parse the text of a locale file.
///
/// String values are taken as-is. Any other value is kept as its compact
/// JSON text, so one odd entry never costs the rest of the file.
///
/// # Errors
/// Returns error if the text is not a JSON object.
pub fn parse_string_dictionary(content: &str) -> Result<LocaleDictionary, serde_json::Error> {
    let entries: Map<String, Value> = serde_json::from_str(content)?;

    Ok(entries
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                other => {
                    tracing::debug!(key = %key, value = %other, "Non-string locale value stored as JSON text");
                    other.to_string()
                }
            };
            (key, text)
        })
        .collect())
}

/// Read and parse one locale file.
///
/// # Errors
/// Returns error if file read or JSON parse fails.
pub fn load_string_dictionary(file_path: &Path) -> Result<LocaleDictionary, ImportError> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|source| ImportError::Read { path: file_path.to_path_buf(), source })?;

    parse_string_dictionary(&content)
        .map_err(|source| ImportError::Parse { path: file_path.to_path_buf(), source })
}
