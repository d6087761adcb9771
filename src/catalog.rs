//! 翻訳カタログ（1 言語分のローカライズマッピング）

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Errors that may occur while parsing a string-table resource.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error when the resource is not valid JSON
    #[error("Failed to parse string table: {0}")]
    Parse(#[from] serde_json::Error),
    /// Error when the resource parses but the top level is not an object
    #[error("String table for '{0}' is not a JSON object")]
    NotAnObject(String),
}

/// ロケール 1 つ分の翻訳マッピング
///
/// ネストされた JSON 文字列テーブルを `.` 区切りのフラットなキーに
/// 展開して保持する（例: `menu.file.open`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// 言語コード（例: "de", "zn_cn"）
    language: String,

    /// フラット化されたキー → 表示文字列のマッピング
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a JSON string table into a catalog.
    ///
    /// # Arguments
    /// * `language` - language code the table belongs to
    /// * `json_text` - nested JSON object of display strings
    ///
    /// # Errors
    /// - JSON parse failure
    /// - the top-level value is not an object
    pub fn parse(language: impl Into<String>, json_text: &str) -> Result<Self, CatalogError> {
        let language = language.into();
        let json: Value = serde_json::from_str(json_text)?;

        if !json.is_object() {
            return Err(CatalogError::NotAnObject(language));
        }

        let mut entries = HashMap::new();
        flatten_value(&json, None, &mut entries);

        Ok(Self { language, entries })
    }

    /// カタログの言語コードを取得
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up the display string for a flattened key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 登録されているエントリ数を取得
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// カタログが空かどうか
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten a nested JSON string table into dot-separated keys.
///
/// Only string leaves are kept: a string table maps keys to display
/// strings, so numbers, booleans, arrays and nulls are skipped with a
/// warning instead of being stringified.
fn flatten_value(json: &Value, prefix: Option<&str>, entries: &mut HashMap<String, String>) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
                flatten_value(value, Some(&full_key), entries);
            }
        }
        Value::String(text) => {
            if let Some(key) = prefix {
                entries.insert(key.to_string(), text.clone());
            }
        }
        _ => {
            tracing::warn!("Skipping non-string entry at {:?} in string table", prefix);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn test_parse_flat_table() {
        let catalog = Catalog::parse(
            "de",
            r#"{
                "ok": "OK",
                "cancel": "Abbrechen"
            }"#,
        )
        .unwrap();

        expect_that!(catalog.language(), eq("de"));
        expect_that!(catalog.get("ok"), some(eq("OK")));
        expect_that!(catalog.get("cancel"), some(eq("Abbrechen")));
        expect_that!(catalog.len(), eq(2));
    }

    #[googletest::test]
    fn test_parse_nested_table_flattens_with_dots() {
        let catalog = Catalog::parse(
            "fr",
            r#"{
                "menu": {
                    "file": {
                        "open": "Ouvrir"
                    }
                },
                "dialog": {
                    "close": "Fermer"
                }
            }"#,
        )
        .unwrap();

        expect_that!(catalog.get("menu.file.open"), some(eq("Ouvrir")));
        expect_that!(catalog.get("dialog.close"), some(eq("Fermer")));
        expect_that!(catalog.len(), eq(2));
    }

    #[googletest::test]
    fn test_parse_skips_non_string_leaves() {
        let catalog = Catalog::parse(
            "de",
            r#"{
                "ok": "OK",
                "count": 3,
                "enabled": true,
                "items": ["a", "b"]
            }"#,
        )
        .unwrap();

        expect_that!(catalog.get("ok"), some(eq("OK")));
        expect_that!(catalog.get("count"), none());
        expect_that!(catalog.get("enabled"), none());
        expect_that!(catalog.get("items"), none());
        expect_that!(catalog.len(), eq(1));
    }

    #[googletest::test]
    fn test_parse_missing_key_is_none() {
        let catalog = Catalog::parse("de", r#"{"ok": "OK"}"#).unwrap();

        expect_that!(catalog.get("missing"), none());
    }

    #[googletest::test]
    fn test_parse_invalid_json_is_error() {
        let result = Catalog::parse("de", "not json");

        expect_that!(matches!(result, Err(CatalogError::Parse(_))), eq(true));
    }

    #[googletest::test]
    fn test_parse_non_object_top_level_is_error() {
        let result = Catalog::parse("de", r#"["a", "b"]"#);

        expect_that!(
            matches!(result, Err(CatalogError::NotAnObject(language)) if language == "de"),
            eq(true)
        );
    }

    #[googletest::test]
    fn test_parse_empty_object_is_empty_catalog() {
        let catalog = Catalog::parse("de", "{}").unwrap();

        expect_that!(catalog.is_empty(), eq(true));
    }
}
