//! Accessors for the host-owned achievement list and global locale table.

use std::collections::HashMap;

use crate::input::achievement::Achievement;

/// Append-only view of the host's achievement list.
pub trait AchievementTable {
    fn push_achievement(&mut self, achievement: Achievement);
    fn achievement_count(&self) -> usize;
}

/// Per-language string mapping owned by the host.
pub trait LocaleTable {
    fn has_language(&self, language: &str) -> bool;
    /// Adds an empty mapping for `language`. Existing entries are left untouched.
    fn create_language(&mut self, language: &str);
    /// Assigns `key` in the mapping of `language`, replacing any previous value.
    fn set_locale_entry(&mut self, language: &str, key: String, value: String);
}

/// Everything the startup hook writes into.
pub trait HostTables: AchievementTable + LocaleTable {}

impl<T: AchievementTable + LocaleTable + ?Sized> HostTables for T {}

/// In-memory host tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseTables {
    pub achievements: Vec<Achievement>,
    /// Language code -> (translation key -> text).
    pub locales: HashMap<String, HashMap<String, String>>,
}

impl DatabaseTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping for `language`, if the language is known.
    #[must_use]
    pub fn locale(&self, language: &str) -> Option<&HashMap<String, String>> {
        self.locales.get(language)
    }
}

impl AchievementTable for DatabaseTables {
    fn push_achievement(&mut self, achievement: Achievement) {
        self.achievements.push(achievement);
    }

    fn achievement_count(&self) -> usize {
        self.achievements.len()
    }
}

impl LocaleTable for DatabaseTables {
    fn has_language(&self, language: &str) -> bool {
        self.locales.contains_key(language)
    }

    fn create_language(&mut self, language: &str) {
        self.locales.entry(language.to_string()).or_default();
    }

    fn set_locale_entry(&mut self, language: &str, key: String, value: String) {
        self.locales.entry(language.to_string()).or_default().insert(key, value);
    }
}
