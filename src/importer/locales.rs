//! Merges `<locales root>/<lang>/*.json` into the host's global locale table.

use std::path::Path;

use super::achievements::display_name;
use super::scan::{
    LanguageDir,
    find_json_files,
    find_language_dirs,
};
use super::{
    ImportReport,
    ModLogger,
};
use crate::host::LocaleTable;
use crate::input::locale::{
    LocaleDictionary,
    load_string_dictionary,
};

/// Imports per-language string dictionaries into a [`LocaleTable`].
#[derive(Debug, Clone, Copy)]
pub struct LocaleImporter<'a> {
    /// Prefixed host logger
    log: ModLogger<'a>,
    /// Process languages and files in name order
    sort_files: bool,
}

impl<'a> LocaleImporter<'a> {
    #[must_use]
    pub const fn new(log: ModLogger<'a>, sort_files: bool) -> Self {
        Self { log, sort_files }
    }

    /// Import every language directory under `locales_root`.
    ///
    /// Each subdirectory name is a language code. Files are merged in
    /// processing order, so on a key collision the file processed last wins.
    /// Missing root, unreadable language directories and bad files are
    /// logged and skipped.
    pub fn import<T>(&self, locales_root: &Path, table: &mut T) -> ImportReport
    where
        T: LocaleTable + ?Sized,
    {
        let mut report = ImportReport::default();

        if !locales_root.exists() {
            self.log
                .warning(&format!("Locales directory not found: {}", locales_root.display()));
            report.directory_missing = true;
            return report;
        }

        let languages = match find_language_dirs(locales_root, self.sort_files) {
            Ok(languages) => languages,
            Err(e) => {
                self.log.error(&format!("Failed to scan locales directory: {e}"));
                return report;
            }
        };

        for language_dir in &languages {
            report += self.import_language(language_dir, table);
        }

        report
    }

    /// Merge every file of one language directory.
    fn import_language<T>(&self, language_dir: &LanguageDir, table: &mut T) -> ImportReport
    where
        T: LocaleTable + ?Sized,
    {
        let mut report = ImportReport::default();
        let lang = language_dir.language.as_str();

        let files = match find_json_files(&language_dir.path, self.sort_files) {
            Ok(files) => files,
            Err(e) => {
                self.log.error(&format!("Failed to scan locale directory for {lang}: {}", e.detail()));
                return report;
            }
        };
        tracing::debug!(lang, count = files.len(), "Found locale files");

        for file_path in files {
            let file_name = display_name(&file_path);
            match load_string_dictionary(&file_path) {
                Ok(locale_data) => {
                    let count = locale_data.len();
                    if self.import_locale_data(lang, locale_data, table) {
                        report.languages_created += 1;
                    }
                    report.files_loaded += 1;
                    report.entries_imported += count;
                    self.log
                        .success(&format!("Loaded locales from {file_name} for language {lang}"));
                }
                Err(e) => {
                    report.files_failed += 1;
                    self.log.error(&format!(
                        "Error loading locale file {file_name} for {lang}: {}",
                        e.detail()
                    ));
                }
            }
        }

        report
    }

    /// Merge one dictionary into the mapping of `lang`, overwriting existing keys.
    ///
    /// An unknown language is created first and reported with a warning,
    /// since it may be a misspelled code. Returns whether it was created.
    pub fn import_locale_data<T>(&self, lang: &str, locale_data: LocaleDictionary, table: &mut T) -> bool
    where
        T: LocaleTable + ?Sized,
    {
        let created = !table.has_language(lang);
        if created {
            self.log.warning(&format!(
                "Language {lang} not found in global locale tables. Creating entry."
            ));
            table.create_language(lang);
        }

        for (key, value) in locale_data {
            table.set_locale_entry(lang, key, value);
        }

        created
    }
}
