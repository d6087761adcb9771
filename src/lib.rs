//! app-i18n
//!
//! デスクトップアプリケーション向けの組み込み i18n カタログサービス。
//! 言語コードから組み込みの文字列テーブルを選択し、アクティブな
//! 翻訳マッピングとしてインストールする。未知のコードは組み込みの
//! デフォルト言語に戻る。

pub mod catalog;
pub mod config;
pub mod registry;
pub mod service;

// LocalizationService を再エクスポート
pub use service::LocalizationService;
