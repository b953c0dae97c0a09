//! Turns a list of records into the final HTTP response.
//!
//! The order of work matters for cost: freshness is computed first so a
//! conditional request can be answered with `304 Not Modified` before any
//! translation lookup or JSON encoding happens.

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nrdb_persistence::core::TranslationStore;
use nrdb_persistence::error::StorageResult;
use nrdb_persistence::types::Record;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::middleware::conditional::ConditionalHeaders;
use crate::responses::envelope::{ResponseEnvelope, last_modified, serialize_record};
use crate::responses::headers::ApiHeaders;

/// Builds the response for `records`, in order.
///
/// - An empty list yields an empty envelope without `Last-Modified` and is
///   never answered with 304.
/// - Otherwise `Last-Modified` is the latest `date_update`, and a request
///   whose `If-Modified-Since` is not older gets 304 with an empty body.
/// - With a `locale`, translations are fetched in one lookup per request
///   and attached under `_locale`.
pub async fn assemble<T, R>(
    translations: &T,
    records: Vec<R>,
    locale: Option<&str>,
    conditional: &ConditionalHeaders,
) -> RestResult<Response>
where
    T: TranslationStore + ?Sized,
    R: Record,
{
    let mut headers = ApiHeaders::new();

    if let Some(latest) = last_modified(&records) {
        if conditional.not_modified_since(&latest) {
            debug!(kind = %R::KIND, %latest, "Returning 304 Not Modified");
            let headers = headers.with_last_modified(latest).without_body();
            return Ok((StatusCode::NOT_MODIFIED, headers.to_header_map()).into_response());
        }
        headers = headers.with_last_modified(latest);
    }

    let overlays = match locale {
        Some(locale) => load_overlays(translations, &records, locale).await?,
        None => HashMap::new(),
    };

    let data = records
        .iter()
        .map(|record| {
            let overlay = locale.and_then(|locale| {
                overlays
                    .get(&record.record_id())
                    .map(|fields: &Map<String, Value>| (locale, fields))
            });
            serialize_record(record, overlay)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let envelope = ResponseEnvelope::new(data);
    let body = serde_json::to_vec(&envelope).map_err(|e| RestError::InternalError {
        message: format!("Failed to encode response: {}", e),
    })?;

    debug!(
        kind = %R::KIND,
        total = envelope.total(),
        locale = locale.unwrap_or(""),
        "Returning envelope"
    );

    Ok((StatusCode::OK, headers.to_header_map(), body).into_response())
}

/// Fields translated into `locale`, keyed by record id.
///
/// A single record reads its own translation set; larger responses use
/// the batched lookup.
async fn load_overlays<T, R>(
    translations: &T,
    records: &[R],
    locale: &str,
) -> StorageResult<HashMap<i64, Map<String, Value>>>
where
    T: TranslationStore + ?Sized,
    R: Record,
{
    match records {
        [] => Ok(HashMap::new()),
        [record] => {
            let id = record.record_id();
            let overlay = translations.translations(R::KIND, id).await?;
            Ok(overlay
                .locale(locale)
                .map(|fields| (id, fields.clone()))
                .into_iter()
                .collect())
        }
        _ => {
            let ids: Vec<i64> = records.iter().map(Record::record_id).collect();
            translations.locale_overlays(R::KIND, locale, &ids).await
        }
    }
}
