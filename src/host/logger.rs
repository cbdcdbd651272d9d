//! Leveled logger provided by the host.

/// Text color understood by the host console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTextColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl LogTextColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }
}

/// Logger handed to the importers by the host.
///
/// Used purely for observability; nothing in this crate branches on it.
pub trait HostLogger {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    /// Informational message rendered in `color` by consoles that support it.
    fn log_with_color(&self, message: &str, color: LogTextColor);
}

/// Forwards every message to `tracing`.
///
/// The host is expected to install the subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl HostLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn log_with_color(&self, message: &str, color: LogTextColor) {
        tracing::info!(color = color.as_str(), "{message}");
    }
}
