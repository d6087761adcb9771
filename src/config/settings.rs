//! ローカライズ設定の型と読み込み

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// 設定ファイル名（設定ディレクトリ直下に置く）
const CONFIG_FILE_NAME: &str = ".app-i18n.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "language")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed: {}", format_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// アプリケーションのローカライズ設定
///
/// 設定ディレクトリ直下の `.app-i18n.json` から読み込む。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizationSettings {
    /// Language code to install at startup (e.g., "de", "zn_cn").
    ///
    /// `None` keeps the application's built-in default language.
    /// Codes outside the supported set also fall back to the default;
    /// that fallback is not a configuration error.
    pub language: Option<String>,
}

impl LocalizationSettings {
    /// Load settings from the application's config directory.
    ///
    /// A missing settings file is not an error and yields the defaults
    /// (built-in default language stays active). A file that exists but
    /// does not parse or validate is reported as an error.
    ///
    /// # Errors
    /// - file read or JSON parse failure
    /// - validation failure (blank `language`)
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(
                "No {} under {:?}, keeping default settings",
                CONFIG_FILE_NAME,
                config_dir
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!("Loaded localization settings {:?} from {:?}", settings, config_path);
        Ok(settings)
    }

    /// 設定値を検証する
    ///
    /// # Errors
    /// 不正なフィールドごとの `ValidationError` のリスト
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(language) = &self.language {
            if language.trim().is_empty() {
                errors.push(ValidationError::new("language", "must not be blank"));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
