//! The JSON envelope wrapped around every successful response.

use chrono::{DateTime, Utc};
use nrdb_persistence::error::StorageResult;
use nrdb_persistence::types::{Record, drop_null_fields};
use serde::Serialize;
use serde_json::{Map, Value};

/// Value of `version_number` in every body.
pub const API_VERSION: &str = "2.0";

/// Key under which a record's translations are attached.
pub const LOCALE_KEY: &str = "_locale";

/// `{version_number, data, total, success}`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    version_number: &'static str,
    data: Vec<Map<String, Value>>,
    total: usize,
    success: bool,
}

impl ResponseEnvelope {
    /// Wraps serialized records. `total` always equals the number of records.
    pub fn new(data: Vec<Map<String, Value>>) -> Self {
        Self {
            version_number: API_VERSION,
            total: data.len(),
            data,
            success: true,
        }
    }

    /// Returns the wrapped records.
    pub fn data(&self) -> &[Map<String, Value>] {
        &self.data
    }

    /// Returns the record count.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Latest `date_update` among `records`, `None` when there are none.
pub fn last_modified<R: Record>(records: &[R]) -> Option<DateTime<Utc>> {
    records.iter().fold(None, |latest, record| {
        let updated = record.date_update();
        match latest {
            Some(latest) if latest >= updated => Some(latest),
            _ => Some(updated),
        }
    })
}

/// Serializes one record, attaching `_locale: {locale: fields}` when an
/// overlay is given. Null fields of the overlay are dropped.
pub fn serialize_record<R: Record>(
    record: &R,
    overlay: Option<(&str, &Map<String, Value>)>,
) -> StorageResult<Map<String, Value>> {
    let mut object = record.to_json_object()?;
    if let Some((locale, fields)) = overlay {
        let mut locales = Map::new();
        locales.insert(locale.to_string(), Value::Object(drop_null_fields(fields)));
        object.insert(LOCALE_KEY.to_string(), Value::Object(locales));
    }
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use nrdb_persistence::types::Cycle;
    use serde_json::json;

    fn cycle(id: i64, code: &str, day: u32) -> Cycle {
        Cycle {
            id,
            code: code.to_string(),
            name: code.to_uppercase(),
            position: id as u32,
            size: 6,
            rotated: false,
            date_update: Utc.with_ymd_and_hms(2020, 1, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_last_modified_is_max() {
        let records = vec![cycle(1, "a", 3), cycle(2, "b", 9), cycle(3, "c", 5)];
        assert_eq!(
            last_modified(&records),
            Some(Utc.with_ymd_and_hms(2020, 1, 9, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_last_modified_empty() {
        assert_eq!(last_modified::<Cycle>(&[]), None);
    }

    #[test]
    fn test_serialize_without_overlay() {
        let object = serialize_record(&cycle(1, "core", 1), None).unwrap();
        assert_eq!(object["code"], "core");
        assert!(!object.contains_key(LOCALE_KEY));
    }

    #[test]
    fn test_serialize_with_overlay_drops_nulls() {
        let fields = json!({"title": "x", "subtitle": null});
        let fields = fields.as_object().unwrap();

        let object = serialize_record(&cycle(1, "core", 1), Some(("fr", fields))).unwrap();
        assert_eq!(object[LOCALE_KEY], json!({"fr": {"title": "x"}}));
    }

    #[test]
    fn test_envelope_shape() {
        let data = vec![serialize_record(&cycle(1, "core", 1), None).unwrap()];
        let envelope = ResponseEnvelope::new(data);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["version_number"], "2.0");
        assert_eq!(value["total"], 1);
        assert_eq!(value["success"], true);
        assert_eq!(value["data"][0]["code"], "core");
    }

    #[test]
    fn test_json_is_not_escaped() {
        let envelope = ResponseEnvelope::new(vec![
            json!({"title": "Déjà Vu", "url": "a/b"})
                .as_object()
                .unwrap()
                .clone(),
        ]);
        let body = String::from_utf8(serde_json::to_vec(&envelope).unwrap()).unwrap();
        assert!(body.contains("Déjà Vu"));
        assert!(body.contains("a/b"));
    }
}
