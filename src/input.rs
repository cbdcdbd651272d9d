//! On-disk import formats.
/// Achievement definition files
pub mod achievement;
/// Locale string dictionaries
pub mod locale;
