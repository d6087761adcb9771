//! 組み込み翻訳リソースのレジストリ
//!
//! サポート言語の文字列テーブルはビルド時に埋め込まれ、実行中に
//! 変更されることはない。

use std::collections::HashMap;
use std::sync::LazyLock;

/// Embedded string tables, one per supported language code.
///
/// Each resource is a UTF-8 JSON document compiled into the binary.
/// The code set is fixed; adding a language means adding a resource
/// file and an entry here.
static EMBEDDED_RESOURCES: &[(&str, &str)] = &[
    ("de", include_str!("../resources/de.json")),
    ("es", include_str!("../resources/es.json")),
    ("fr", include_str!("../resources/fr.json")),
    ("it", include_str!("../resources/it.json")),
    ("ja", include_str!("../resources/ja.json")),
    ("ko", include_str!("../resources/ko.json")),
    ("nl", include_str!("../resources/nl.json")),
    ("pt", include_str!("../resources/pt.json")),
    ("sv", include_str!("../resources/sv.json")),
    ("zn_cn", include_str!("../resources/zn_cn.json")),
    ("zn_tw", include_str!("../resources/zn_tw.json")),
];

/// サポートされている言語コード（アルファベット順）
///
/// `EMBEDDED_RESOURCES` と同じ順で並ぶ。
static SUPPORTED_LANGUAGES: &[&str] =
    &["de", "es", "fr", "it", "ja", "ko", "nl", "pt", "sv", "zn_cn", "zn_tw"];

/// 言語コード → 組み込みリソースのルックアップテーブル
static RESOURCE_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EMBEDDED_RESOURCES.iter().copied().collect());

/// Look up the embedded string table for a language code.
///
/// Lookup is exact-match: case variants of supported codes (`"DE"`,
/// `"Ja"`) are unknown codes.
///
/// # Returns
/// - `Some(resource)`: the embedded JSON string table for `code`
/// - `None`: `code` is not a supported language
#[must_use]
pub fn resource_for(code: &str) -> Option<&'static str> {
    RESOURCE_TABLE.get(code).copied()
}

/// サポートされている言語コードの一覧（アルファベット順）を取得
#[must_use]
pub const fn supported_languages() -> &'static [&'static str] {
    SUPPORTED_LANGUAGES
}
