use std::ops::AddAssign;

/// What one importer run did.
///
/// Never used to signal failure to the host; the startup hook always
/// completes normally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// The source directory did not exist, so nothing was scanned.
    pub directory_missing: bool,
    pub files_loaded: usize,
    pub files_failed: usize,
    /// Achievements appended, or locale keys assigned.
    pub entries_imported: usize,
    /// Languages that were absent from the locale table and got created.
    pub languages_created: usize,
}

impl AddAssign for ImportReport {
    fn add_assign(&mut self, rhs: Self) {
        self.directory_missing |= rhs.directory_missing;
        self.files_loaded += rhs.files_loaded;
        self.files_failed += rhs.files_failed;
        self.entries_imported += rhs.entries_imported;
        self.languages_created += rhs.languages_created;
    }
}
