//! Directory listing for the importers.
//!
//! Only direct children are listed. Entries are returned in lexicographic
//! file-name order when `sorted` is set, otherwise in platform listing order.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    GlobBuilder,
    GlobMatcher,
};
use ignore::{
    DirEntry,
    WalkBuilder,
};

use crate::error::ImportError;

/// Matches `*.json` file names, extension compared case-insensitively.
/// A dotfile named `.json` has no extension and is not matched.
const JSON_FILE_PATTERN: &str = "?*.json";

/// A language subdirectory of the locales root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDir {
    /// Directory name, used as the language code
    pub language: String,
    pub path: PathBuf,
}

/// List the `.json` files directly inside `dir`.
///
/// # Errors
/// Returns error if `dir` is not a directory or cannot be listed.
pub fn find_json_files(dir: &Path, sorted: bool) -> Result<Vec<PathBuf>, ImportError> {
    let matcher = json_file_matcher(dir)?;

    let files = list_children(dir, sorted)?
        .into_iter()
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| matcher.is_match(Path::new(entry.file_name())))
        .map(DirEntry::into_path)
        .collect();

    Ok(files)
}

/// List the subdirectories of the locales root as language directories.
///
/// Directory names that are not valid UTF-8 are skipped.
///
/// # Errors
/// Returns error if `root` is not a directory or cannot be listed.
pub fn find_language_dirs(root: &Path, sorted: bool) -> Result<Vec<LanguageDir>, ImportError> {
    let mut dirs = Vec::new();

    for entry in list_children(root, sorted)? {
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        let Some(language) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 language directory");
            continue;
        };
        dirs.push(LanguageDir { language, path: entry.into_path() });
    }

    Ok(dirs)
}

/// Compiled [`JSON_FILE_PATTERN`]; `dir` only labels the error.
fn json_file_matcher(dir: &Path) -> Result<GlobMatcher, ImportError> {
    GlobBuilder::new(JSON_FILE_PATTERN)
        .case_insensitive(true)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| ImportError::Scan {
            path: dir.to_path_buf(),
            message: format!("Invalid file pattern '{JSON_FILE_PATTERN}': {e}"),
        })
}

/// Direct children of `dir`, without the ignore-file and hidden-file filtering
/// the `ignore` crate applies by default.
fn list_children(dir: &Path, sorted: bool) -> Result<Vec<DirEntry>, ImportError> {
    if !dir.is_dir() {
        return Err(ImportError::Scan {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut builder = WalkBuilder::new(dir);
    builder.standard_filters(false).max_depth(Some(1)).follow_links(true);
    if sorted {
        builder.sort_by_file_name(|a, b| a.cmp(b));
    }

    let mut children = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            // Failing to list `dir` itself is reported at depth 0.
            Err(err) if err.depth().unwrap_or(0) == 0 => {
                return Err(ImportError::Scan { path: dir.to_path_buf(), message: err.to_string() });
            }
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }
        children.push(entry);
    }

    Ok(children)
}
