//! アプリケーション設定モジュール

mod settings;

pub use settings::{
    ConfigError,
    LocalizationSettings,
    ValidationError,
};
