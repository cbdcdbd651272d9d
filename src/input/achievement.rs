//! Achievement definition files: `<module>/db/data/*.json`, each a JSON array.

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::error::ImportError;

/// One achievement record.
///
/// The schema belongs to the host, so the record is kept as raw JSON and
/// handed over unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievement(
    /// Raw record as read from the file
    Value,
);

impl Achievement {
    /// The `"id"` field, when the record carries a string one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Achievement {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Parse the text of an achievement file.
///
/// # Errors
/// Returns error if the text is not a JSON array.
pub fn parse_achievements(content: &str) -> Result<Vec<Achievement>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Read and parse one achievement file, keeping the array order.
///
/// # Errors
/// Returns error if file read or JSON parse fails.
pub fn load_achievement_file(file_path: &Path) -> Result<Vec<Achievement>, ImportError> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|source| ImportError::Read { path: file_path.to_path_buf(), source })?;

    parse_achievements(&content)
        .map_err(|source| ImportError::Parse { path: file_path.to_path_buf(), source })
}
