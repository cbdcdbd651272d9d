//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパーを提供します。
#![cfg(test)]

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::host::{
    HostLogger,
    LogTextColor,
};

/// Log level as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogLevel {
    /// `info`
    Info,
    /// `warning`
    Warning,
    /// `error`
    Error,
    /// `log_with_color`
    Color(LogTextColor),
}

/// Host logger that keeps every message for inspection.
#[derive(Debug, Default)]
pub(crate) struct RecordingLogger {
    /// Every message, in emission order
    messages: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    /// All recorded messages.
    pub(crate) fn messages(&self) -> Vec<(LogLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Messages recorded at `level`.
    pub(crate) fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Number of messages recorded at `level`.
    pub(crate) fn count(&self, level: LogLevel) -> usize {
        self.messages.borrow().iter().filter(|(l, _)| *l == level).count()
    }

    /// Record one message.
    fn push(&self, level: LogLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl HostLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }

    fn log_with_color(&self, message: &str, color: LogTextColor) {
        self.push(LogLevel::Color(color), message);
    }
}

/// `dir/name` にファイルを書き込む（ディレクトリは必要に応じて作成）
#[allow(clippy::unwrap_used)]
pub(crate) fn write_file(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}
