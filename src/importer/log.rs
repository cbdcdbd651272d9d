use crate::config::ImporterSettings;
use crate::host::{
    HostLogger,
    LogTextColor,
};

/// Host logger wrapper that prefixes every line and drops informational and
/// warning output unless `debug` is enabled.
#[derive(Clone, Copy)]
pub struct ModLogger<'a> {
    /// Host logger
    inner: &'a dyn HostLogger,
    /// Line prefix, without the trailing colon
    prefix: &'a str,
    /// Whether non-error output is emitted
    debug: bool,
}

impl std::fmt::Debug for ModLogger<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModLogger")
            .field("prefix", &self.prefix)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl<'a> ModLogger<'a> {
    #[must_use]
    pub fn new(inner: &'a dyn HostLogger, settings: &'a ImporterSettings) -> Self {
        Self { inner, prefix: &settings.log_prefix, debug: settings.debug }
    }

    /// Green progress message.
    pub fn success(&self, message: &str) {
        if self.debug {
            self.inner.log_with_color(&self.prefixed(message), LogTextColor::Green);
        }
    }

    pub fn info(&self, message: &str) {
        if self.debug {
            self.inner.info(&self.prefixed(message));
        }
    }

    pub fn warning(&self, message: &str) {
        if self.debug {
            self.inner.warning(&self.prefixed(message));
        }
    }

    /// Always emitted.
    pub fn error(&self, message: &str) {
        self.inner.error(&self.prefixed(message));
    }

    /// `message` behind the configured prefix.
    fn prefixed(&self, message: &str) -> String {
        format!("{}: {message}", self.prefix)
    }
}
