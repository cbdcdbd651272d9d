//! The host startup hook.

use std::path::{
    Path,
    PathBuf,
};

use crate::config::{
    ConfigManager,
    ImporterSettings,
};
use crate::host::{
    HostLogger,
    HostTables,
    LogTextColor,
};
use crate::importer::{
    AchievementImporter,
    ImportReport,
    LocaleImporter,
    ModLogger,
};

/// A mod that runs once the host has loaded its own database.
///
/// The host passes its collaborators in directly instead of exposing a
/// service container.
pub trait PostDbLoadMod {
    fn post_db_load(&mut self, logger: &dyn HostLogger, tables: &mut dyn HostTables);
}

/// Outcome of the startup import, per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub achievements: ImportReport,
    pub locales: ImportReport,
}

/// Imports the achievement and locale files shipped in a module directory.
#[derive(Debug, Clone)]
pub struct MoreAchievements {
    /// Directory the mod was installed in
    module_root: PathBuf,
    /// Settings in effect for this run
    settings: ImporterSettings,
    /// Set once the hook has run.
    report: Option<StartupReport>,
}

impl MoreAchievements {
    #[must_use]
    pub fn new(module_root: impl Into<PathBuf>, settings: ImporterSettings) -> Self {
        Self { module_root: module_root.into(), settings, report: None }
    }

    /// Create the mod with the settings file of `module_root`, if any.
    ///
    /// An unreadable or invalid settings file is logged and the defaults are used.
    #[must_use]
    pub fn from_module_root(module_root: impl Into<PathBuf>, logger: &dyn HostLogger) -> Self {
        let module_root = module_root.into();
        let mut manager = ConfigManager::new();

        if let Err(error) = manager.load_settings(&module_root) {
            let defaults = ImporterSettings::default();
            ModLogger::new(logger, &defaults)
                .error(&format!("Invalid settings, using defaults: {error}"));
            tracing::debug!(?error, "Settings error");
        }

        Self::new(module_root, manager.into_settings())
    }

    #[must_use]
    pub fn module_root(&self) -> &Path {
        &self.module_root
    }

    #[must_use]
    pub const fn settings(&self) -> &ImporterSettings {
        &self.settings
    }

    #[must_use]
    pub fn data_directory(&self) -> PathBuf {
        self.module_root.join(&self.settings.data_directory)
    }

    #[must_use]
    pub fn locales_directory(&self) -> PathBuf {
        self.module_root.join(&self.settings.locales_directory)
    }

    /// Outcome of the import, once the hook has run.
    #[must_use]
    pub const fn report(&self) -> Option<&StartupReport> {
        self.report.as_ref()
    }
}

impl PostDbLoadMod for MoreAchievements {
    fn post_db_load(&mut self, logger: &dyn HostLogger, tables: &mut dyn HostTables) {
        let log = ModLogger::new(logger, &self.settings);

        if self.report.is_some() {
            log.warning("Startup import already ran, skipping");
            return;
        }

        log.success("Loading custom achievement files...");

        let achievements = AchievementImporter::new(log, self.settings.sort_files)
            .import(&self.data_directory(), &mut *tables);
        let locales = LocaleImporter::new(log, self.settings.sort_files)
            .import(&self.locales_directory(), &mut *tables);

        tracing::debug!(?achievements, ?locales, "Startup import finished");
        log.info(&format!(
            "Imported {} achievement(s) and {} locale entries",
            achievements.entries_imported, locales.entries_imported
        ));
        if achievements.files_failed + locales.files_failed > 0 {
            logger.log_with_color(
                &format!(
                    "{}: {} file(s) could not be imported",
                    self.settings.log_prefix,
                    achievements.files_failed + locales.files_failed
                ),
                LogTextColor::Yellow,
            );
        }

        self.report = Some(StartupReport { achievements, locales });
    }
}
