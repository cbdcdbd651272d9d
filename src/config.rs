//! Importer settings
/// Settings file loader
mod loader;
/// Settings manager
mod manager;
/// Settings types and validation
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    ImporterSettings,
    SETTINGS_FILE_NAME,
    ValidationError,
};
