//! Errors raised while reading import sources.

use std::path::PathBuf;

use thiserror::Error;

/// A failure tied to a single file or directory.
///
/// Importers never surface these to the host; they are logged and the
/// offending file is skipped.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file content is not the expected JSON shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A directory could not be listed.
    #[error("failed to scan {}: {message}", path.display())]
    Scan { path: PathBuf, message: String },
}

impl ImportError {
    /// Path of the file or directory the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Scan { path, .. } => path,
        }
    }

    /// Underlying message without the path, as shown next to the file name in logs.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Read { source, .. } => source.to_string(),
            Self::Parse { source, .. } => source.to_string(),
            Self::Scan { message, .. } => message.clone(),
        }
    }
}
