//! Decklist handlers.
//!
//! - `GET /decklist/{decklist_id}`
//! - `GET /decklists/{date}`

use axum::{
    extract::{Path, State},
    response::Response,
};
use nrdb_persistence::core::RecordStore;
use nrdb_persistence::types::{CreationRange, RecordKind};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::Locale;
use crate::middleware::conditional::ConditionalHeaders;
use crate::responses::assemble;
use crate::state::AppState;

use super::parse_id;

/// Handler for a single published decklist.
///
/// # Response
///
/// - `200 OK` - Envelope holding the decklist
/// - `304 Not Modified` - Decklist unchanged since `If-Modified-Since`
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No decklist has this id
pub async fn decklist_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    let id = parse_id(RecordKind::Decklist, &raw_id)?;
    debug!(id, locale = ?locale.code(), "Processing decklist request");

    let decklist = state.storage().decklist_by_id(id).await?;
    let decklist = decklist.ok_or(RestError::NotFound {
        kind: RecordKind::Decklist,
        key: raw_id,
    })?;

    assemble(state.storage(), vec![decklist], locale.code(), &conditional).await
}

/// Handler for the decklists published on one UTC day.
///
/// `{date}` must be `YYYY-MM-DD`; the day covers `[date, date + 1 day)`.
///
/// # Response
///
/// - `200 OK` - Envelope holding the decklists, possibly none
/// - `304 Not Modified` - No decklist changed since `If-Modified-Since`
/// - `400 Bad Request` - Malformed date
pub async fn decklists_by_date_handler<S>(
    State(state): State<AppState<S>>,
    Path(date): Path<String>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    let range = CreationRange::parse_day(&date).ok_or_else(|| RestError::BadRequest {
        message: format!("Invalid date '{}', expected YYYY-MM-DD", date),
    })?;
    debug!(start = %range.start(), end = %range.end(), "Processing decklists request");

    let decklists = state.storage().decklists_created_in(range).await?;
    assemble(state.storage(), decklists, locale.code(), &conditional).await
}
