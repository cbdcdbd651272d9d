//! 設定ファイルの読み込み関数

use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use super::{
    ConfigError,
    ImporterSettings,
    SETTINGS_FILE_NAME,
};

/// モジュールのルートから設定を読み込む
///
/// `.more-achievements.json` ファイルを探して読み込む
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_module_root(
    module_root: &Path,
) -> Result<Option<ImporterSettings>, ConfigError> {
    let config_path = module_root.join(SETTINGS_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Settings file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    // トップレベルはオブジェクトのみ
    let raw: Map<String, Value> = serde_json::from_str(&content)?;

    parse_settings(raw).map(Some)
}

/// キーごとに検証してから設定に変換する
///
/// 不正な値はキー名付きの `ConfigError::InvalidField` になる。
/// 未知のキーは警告して無視する。
fn parse_settings(raw: Map<String, Value>) -> Result<ImporterSettings, ConfigError> {
    let known = known_keys();

    for (key, value) in &raw {
        if !known.contains(key) {
            tracing::warn!(key = %key, "Unknown settings key ignored");
            continue;
        }

        let single: Map<String, Value> = [(key.clone(), value.clone())].into_iter().collect();
        if let Err(e) = serde_json::from_value::<ImporterSettings>(Value::Object(single)) {
            return Err(ConfigError::InvalidField { field: key.clone(), message: e.to_string() });
        }
    }

    Ok(serde_json::from_value(Value::Object(raw))?)
}

/// 設定ファイルで使えるキー（camelCase）
fn known_keys() -> Vec<String> {
    match serde_json::to_value(ImporterSettings::default()) {
        Ok(Value::Object(map)) => map.into_iter().map(|(key, _)| key).collect(),
        _ => Vec::new(),
    }
}
