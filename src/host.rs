//! Interfaces to the host process: its logger and its in-memory tables.
/// Host logger abstraction
pub mod logger;
/// Achievement and locale table accessors
pub mod tables;

pub use logger::{
    HostLogger,
    LogTextColor,
    TracingLogger,
};
pub use tables::{
    AchievementTable,
    DatabaseTables,
    HostTables,
    LocaleTable,
};
