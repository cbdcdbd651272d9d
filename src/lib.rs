//! more-achievements
//!
//! Startup importer for a game server: merges custom achievement definitions
//! and per-language locale strings from a module directory into the host's
//! in-memory tables.

pub mod config;
pub mod error;
pub mod host;
pub mod importer;
pub mod input;
pub mod lifecycle;

#[cfg(test)]
mod test_utils;

pub use error::ImportError;
pub use lifecycle::{
    MoreAchievements,
    PostDbLoadMod,
};
