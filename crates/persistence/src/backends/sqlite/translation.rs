//! TranslationStore implementation for SQLite.

use std::collections::HashMap;

use async_trait::async_trait;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter};
use serde_json::{Map, Value};

use crate::core::TranslationStore;
use crate::error::StorageResult;
use crate::types::{RecordKind, TranslationOverlay};

use super::SqliteBackend;
use super::backend::query_error;

/// Ids bound per `IN (...)` query, well under SQLite's parameter limit.
const IDS_PER_QUERY: usize = 500;

#[async_trait]
impl TranslationStore for SqliteBackend {
    async fn translations(&self, kind: RecordKind, id: i64) -> StorageResult<TranslationOverlay> {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare(
                "SELECT locale, field, content FROM translations
                 WHERE object_class = ?1 AND foreign_key = ?2
                 ORDER BY locale, field",
            )
            .map_err(|e| query_error("Failed to prepare translation query", e))?;
        let rows = stmt
            .query_map(params![kind.as_str(), id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            })
            .map_err(|e| query_error("Failed to read translations", e))?;

        let mut overlay = TranslationOverlay::new();
        for row in rows {
            let (locale, field, content) =
                row.map_err(|e| query_error("Failed to read translation row", e))?;
            overlay.insert(&locale, &field, content);
        }
        Ok(overlay)
    }

    async fn locale_overlays(
        &self,
        kind: RecordKind,
        locale: &str,
        ids: &[i64],
    ) -> StorageResult<HashMap<i64, Map<String, Value>>> {
        let mut overlays: HashMap<i64, Map<String, Value>> = HashMap::new();
        if ids.is_empty() {
            return Ok(overlays);
        }

        let conn = self.get_connection()?;
        for chunk in ids.chunks(IDS_PER_QUERY) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "SELECT foreign_key, field, content FROM translations
                 WHERE object_class = ? AND locale = ? AND foreign_key IN ({})",
                placeholders
            );

            let mut bound = Vec::with_capacity(chunk.len() + 2);
            bound.push(SqlValue::Text(kind.as_str().to_string()));
            bound.push(SqlValue::Text(locale.to_string()));
            bound.extend(chunk.iter().map(|id| SqlValue::Integer(*id)));

            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| query_error("Failed to prepare overlay query", e))?;
            let rows = stmt
                .query_map(params_from_iter(bound), |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<String>>(2)?,
                    ))
                })
                .map_err(|e| query_error("Failed to read overlays", e))?;

            for row in rows {
                let (id, field, content) =
                    row.map_err(|e| query_error("Failed to read overlay row", e))?;
                let value = content.map(Value::String).unwrap_or(Value::Null);
                overlays.entry(id).or_default().insert(field, value);
            }
        }

        Ok(overlays)
    }
}
