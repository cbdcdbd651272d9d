//! 設定管理を行うモジュール

use std::path::Path;

use super::{
    ConfigError,
    ImporterSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: ImporterSettings,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: ImporterSettings::default() }
    }

    /// 設定を読み込む
    ///
    /// 設定ファイルがない場合はデフォルト値を使う。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, module_root: &Path) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for module: {:?}", module_root);

        let settings =
            loader::load_from_module_root(module_root)?.map_or_else(ImporterSettings::default, |s| {
                tracing::debug!("Loaded module settings: {:?}", s);
                s
            });

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &ImporterSettings {
        &self.current_settings
    }

    /// 設定を消費して取り出す
    #[must_use]
    pub fn into_settings(self) -> ImporterSettings {
        self.current_settings
    }
}
