//! ローカライズサービス
//!
//! アクティブな翻訳マッピングの唯一の所有者。`set_language` は前の
//! マッピングを完全に置き換え、マージは行わない。

use std::path::Path;

use crate::catalog::Catalog;
use crate::config::{
    ConfigError,
    LocalizationSettings,
};
use crate::registry;

/// Owns the single active localization mapping.
///
/// At most one catalog is active at a time; `None` means the
/// application's built-in default language. Mutation goes through
/// `&mut self`, so the UI-thread-only contract of a global mapping
/// becomes an ownership rule instead.
#[derive(Default, Debug, Clone)]
pub struct LocalizationService {
    /// 現在アクティブなカタログ（None = 組み込みのデフォルト言語）
    active: Option<Catalog>,
}

impl LocalizationService {
    /// Create a service with no active mapping (default language).
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Create a service with the configured language pre-installed.
    ///
    /// An unset `language` leaves the default language active.
    #[must_use]
    pub fn from_settings(settings: &LocalizationSettings) -> Self {
        let mut service = Self::new();
        if let Some(code) = &settings.language {
            service.set_language(code);
        }
        service
    }

    /// Load settings from `config_dir` and create a service with the
    /// configured language installed.
    ///
    /// # Errors
    /// Settings file read, parse or validation failure.
    pub fn from_config_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        let settings = LocalizationSettings::load(config_dir)?;
        Ok(Self::from_settings(&settings))
    }

    /// Install the string table for `code`, or clear back to the
    /// default language if `code` is not a supported language.
    ///
    /// Each call fully replaces the previous mapping. Unknown codes are
    /// not an error; they select the default language. A malformed
    /// embedded resource is treated the same way, with a warning.
    pub fn set_language(&mut self, code: &str) {
        let Some(resource) = registry::resource_for(code) else {
            tracing::warn!("Unsupported language code {:?}, using default language", code);
            self.active = None;
            return;
        };

        match Catalog::parse(code, resource) {
            Ok(catalog) => {
                tracing::debug!(
                    "Installed localization mapping for {:?} ({} entries)",
                    code,
                    catalog.len()
                );
                self.active = Some(catalog);
            }
            Err(err) => {
                tracing::warn!("Embedded string table for {:?} is malformed: {}", code, err);
                self.active = None;
            }
        }
    }

    /// Clear the active mapping, restoring the default language.
    pub fn reset(&mut self) {
        tracing::debug!("Cleared localization mapping");
        self.active = None;
    }

    /// Translate `text` through the active mapping.
    ///
    /// Returns `text` unchanged when no mapping is active or the key is
    /// missing from the active catalog (untranslated pass-through).
    #[must_use]
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        self.active.as_ref().and_then(|catalog| catalog.get(text)).unwrap_or(text)
    }

    /// アクティブなマッピングの言語コードを取得（デフォルト言語なら None）
    #[must_use]
    pub fn current_language(&self) -> Option<&str> {
        self.active.as_ref().map(Catalog::language)
    }

    /// Whether the built-in default language is active.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.active.is_none()
    }
}
