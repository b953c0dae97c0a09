//! Translation lookups.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StorageResult;
use crate::types::{RecordKind, TranslationOverlay};

/// Read access to per-locale field translations.
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Returns every translation of one record, all locales included.
    ///
    /// A record without translations yields an empty overlay.
    async fn translations(&self, kind: RecordKind, id: i64) -> StorageResult<TranslationOverlay>;

    /// Returns the fields translated into `locale` for each of `ids`.
    ///
    /// Records without a translation in that locale are absent from the
    /// map. Field values are returned as stored, nulls included.
    async fn locale_overlays(
        &self,
        kind: RecordKind,
        locale: &str,
        ids: &[i64],
    ) -> StorageResult<HashMap<i64, Map<String, Value>>>;
}
