//! Startup importers that merge module files into the host tables.
/// Achievement importer
pub mod achievements;
/// Locale importer
pub mod locales;
/// Prefixed, debug-gated logging
mod log;
/// Per-run counters
mod report;
/// Directory scanning
pub mod scan;

pub use achievements::AchievementImporter;
pub use locales::LocaleImporter;
pub use log::ModLogger;
pub use report::ImportReport;
