//! Appends every record of `<data dir>/*.json` to the host achievement table.

use std::path::Path;

use super::scan::find_json_files;
use super::{
    ImportReport,
    ModLogger,
};
use crate::host::AchievementTable;
use crate::input::achievement::load_achievement_file;

/// Imports achievement definition files into an [`AchievementTable`].
#[derive(Debug, Clone, Copy)]
pub struct AchievementImporter<'a> {
    /// Prefixed host logger
    log: ModLogger<'a>,
    /// Process files in file-name order
    sort_files: bool,
}

impl<'a> AchievementImporter<'a> {
    #[must_use]
    pub const fn new(log: ModLogger<'a>, sort_files: bool) -> Self {
        Self { log, sort_files }
    }

    /// Import every achievement file in `data_directory`.
    ///
    /// A missing directory is logged as a warning and leaves the table
    /// untouched. A file that cannot be read or parsed is logged as an error
    /// and skipped; the remaining files are still imported. Records are
    /// appended as-is, without deduplication.
    pub fn import<T>(&self, data_directory: &Path, table: &mut T) -> ImportReport
    where
        T: AchievementTable + ?Sized,
    {
        let mut report = ImportReport::default();

        if !data_directory.exists() {
            self.log
                .warning(&format!("Data directory not found: {}", data_directory.display()));
            report.directory_missing = true;
            return report;
        }

        let files = match find_json_files(data_directory, self.sort_files) {
            Ok(files) => files,
            Err(e) => {
                self.log.error(&format!("Failed to scan data directory: {e}"));
                return report;
            }
        };
        tracing::debug!(count = files.len(), dir = %data_directory.display(), "Found achievement files");

        for file_path in files {
            let file_name = display_name(&file_path);
            match load_achievement_file(&file_path) {
                Ok(achievements) => {
                    let count = achievements.len();
                    for achievement in achievements {
                        table.push_achievement(achievement);
                    }
                    report.files_loaded += 1;
                    report.entries_imported += count;
                    self.log.success(&format!("Loaded {count} achievements from {file_name}"));
                }
                Err(e) => {
                    report.files_failed += 1;
                    self.log.error(&format!(
                        "Error loading achievement file {file_name}: {}",
                        e.detail()
                    ));
                }
            }
        }

        report
    }
}

/// File name for log lines, falling back to the full path.
#[must_use]
pub(super) fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::config::ImporterSettings;
    use crate::host::DatabaseTables;
    use crate::input::achievement::Achievement;
    use crate::test_utils::{
        LogLevel,
        RecordingLogger,
        write_file,
    };

    /// Runs the importer over `dir` with default settings.
    fn import_dir(dir: &Path, tables: &mut DatabaseTables) -> (ImportReport, RecordingLogger) {
        let recorder = RecordingLogger::default();
        let settings = ImporterSettings::default();
        let importer = AchievementImporter::new(ModLogger::new(&recorder, &settings), true);
        let report = importer.import(dir, tables);
        (report, recorder)
    }

    #[googletest::test]
    fn test_import_keeps_intra_file_order() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "a.json", r#"[{"id":"ach1"}]"#);
        write_file(temp_dir.path(), "b.json", r#"[{"id":"ach2"},{"id":"ach3"}]"#);
        let mut tables = DatabaseTables::new();

        let (report, _) = import_dir(temp_dir.path(), &mut tables);

        expect_that!(report.entries_imported, eq(3));
        expect_that!(report.files_loaded, eq(2));
        let ids: Vec<_> = tables.achievements.iter().filter_map(Achievement::id).collect();
        expect_that!(ids.len(), eq(3));
        let pos = |id: &str| ids.iter().position(|x| *x == id).unwrap();
        expect_that!(pos("ach2") < pos("ach3"), eq(true));
        // a.json and b.json are never interleaved
        expect_that!(pos("ach3") - pos("ach2"), eq(1));
    }

    #[googletest::test]
    fn test_import_appends_after_existing_entries() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "more.json", r#"[{"id":"new", "rewards": [{"value": 5}]}]"#);
        let mut tables = DatabaseTables::new();
        tables.achievements.push(Achievement::from(json!({"id": "host"})));

        import_dir(temp_dir.path(), &mut tables);

        expect_that!(tables.achievements.len(), eq(2));
        assert_eq!(tables.achievements[0].id(), Some("host"));
        assert_eq!(tables.achievements[1].as_value(), &json!({"id":"new", "rewards": [{"value": 5}]}));
    }

    #[googletest::test]
    fn test_import_does_not_deduplicate() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "a.json", r#"[{"id":"same"}]"#);
        write_file(temp_dir.path(), "b.json", r#"[{"id":"same"}]"#);
        let mut tables = DatabaseTables::new();

        import_dir(temp_dir.path(), &mut tables);

        expect_that!(tables.achievements.len(), eq(2));
    }

    #[googletest::test]
    fn test_missing_directory_is_a_warning() {
        let temp_dir = TempDir::new().unwrap();
        let mut tables = DatabaseTables::new();
        tables.achievements.push(Achievement::from(json!({"id": "host"})));
        let before = tables.clone();

        let (report, recorder) = import_dir(&temp_dir.path().join("db/data"), &mut tables);

        expect_that!(report.directory_missing, eq(true));
        expect_that!(tables == before, eq(true));
        expect_that!(recorder.count(LogLevel::Warning), eq(1));
        expect_that!(recorder.count(LogLevel::Error), eq(0));
    }

    #[rstest]
    #[case::malformed("[{\"id\": ")]
    #[case::not_an_array(r#"{"id": "ach"}"#)]
    fn test_bad_file_is_skipped(#[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "bad.json", content);
        write_file(temp_dir.path(), "good1.json", r#"[{"id":"g1"}]"#);
        write_file(temp_dir.path(), "good2.json", r#"[{"id":"g2"},{"id":"g3"}]"#);
        let mut tables = DatabaseTables::new();

        let (report, recorder) = import_dir(temp_dir.path(), &mut tables);

        assert_eq!(report.files_loaded, 2);
        assert_eq!(report.files_failed, 1);
        assert_eq!(tables.achievements.len(), 3);
        let errors = recorder.messages_at(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("bad.json"));
    }

    #[googletest::test]
    fn test_non_json_files_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "readme.txt", "not json");
        write_file(temp_dir.path(), "UPPER.JSON", r#"[{"id":"upper"}]"#);
        let mut tables = DatabaseTables::new();

        let (report, recorder) = import_dir(temp_dir.path(), &mut tables);

        expect_that!(report.files_loaded, eq(1));
        expect_that!(recorder.count(LogLevel::Error), eq(0));
        assert_eq!(tables.achievements[0].id(), Some("upper"));
    }

    #[googletest::test]
    fn test_data_path_that_is_a_file_is_logged() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data");
        fs::write(&file, "[]").unwrap();
        let mut tables = DatabaseTables::new();

        let (report, recorder) = import_dir(&file, &mut tables);

        expect_that!(report, eq(ImportReport::default()));
        expect_that!(recorder.count(LogLevel::Error), eq(1));
    }
}
