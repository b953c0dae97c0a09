//! Per-locale field translations.
//!
//! Translations are stored one row per (record, locale, field). A missing
//! translation for a field is stored as `NULL` and must never reach a
//! response as `null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::RecordKind;

/// A single translated field of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    /// Kind of the translated record.
    pub object_class: RecordKind,
    /// Primary key of the translated record.
    pub foreign_key: i64,
    /// Locale code, e.g. `"fr"`.
    pub locale: String,
    /// Name of the translated field.
    pub field: String,
    /// Translated value, `None` when the field has no translation yet.
    #[serde(default)]
    pub content: Option<String>,
}

/// All translations of one record, keyed by locale then field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationOverlay {
    locales: BTreeMap<String, Map<String, Value>>,
}

impl TranslationOverlay {
    /// Creates an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a translated field. `None` is kept as `null` so that the
    /// locale is known to exist even when none of its fields are filled.
    pub fn insert(&mut self, locale: &str, field: &str, content: Option<String>) {
        let value = content.map(Value::String).unwrap_or(Value::Null);
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(field.to_string(), value);
    }

    /// Returns the raw fields for a locale, nulls included.
    pub fn locale(&self, locale: &str) -> Option<&Map<String, Value>> {
        self.locales.get(locale)
    }
}

/// Copies a field map, leaving out every null value.
pub fn drop_null_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_content_is_kept_as_null() {
        let mut overlay = TranslationOverlay::new();
        overlay.insert("fr", "title", Some("x".to_string()));
        overlay.insert("fr", "subtitle", None);

        let fr = overlay.locale("fr").unwrap();
        assert_eq!(fr["title"], "x");
        assert_eq!(fr["subtitle"], Value::Null);
        assert_eq!(Value::Object(drop_null_fields(fr)), json!({"title": "x"}));
    }

    #[test]
    fn test_missing_locale_is_none() {
        let mut overlay = TranslationOverlay::new();
        overlay.insert("de", "title", Some("Geräusch".to_string()));
        assert!(overlay.locale("fr").is_none());
    }

    #[test]
    fn test_all_null_locale_is_present() {
        let mut overlay = TranslationOverlay::new();
        overlay.insert("es", "text", None);
        assert_eq!(drop_null_fields(overlay.locale("es").unwrap()), Map::new());
    }
}
