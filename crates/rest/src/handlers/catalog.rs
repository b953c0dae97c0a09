//! Catalog handlers: cycles, packs and cards.
//!
//! - `GET /cycle/{cycle_code}`, `GET /cycles`
//! - `GET /pack/{pack_code}`, `GET /packs`
//! - `GET /card/{card_code}`, `GET /cards`

use axum::{
    extract::{Path, State},
    response::Response,
};
use nrdb_persistence::core::RecordStore;
use nrdb_persistence::types::RecordKind;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::Locale;
use crate::middleware::conditional::ConditionalHeaders;
use crate::responses::assemble;
use crate::state::AppState;

/// Handler for a single cycle.
///
/// # Response
///
/// - `200 OK` - Envelope holding the cycle
/// - `304 Not Modified` - Cycle unchanged since `If-Modified-Since`
/// - `404 Not Found` - No cycle has this code
pub async fn cycle_handler<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    debug!(code = %code, locale = ?locale.code(), "Processing cycle request");

    let cycle = state.storage().cycle_by_code(&code).await?;
    let cycle = cycle.ok_or(RestError::NotFound {
        kind: RecordKind::Cycle,
        key: code,
    })?;

    assemble(state.storage(), vec![cycle], locale.code(), &conditional).await
}

/// Handler for every cycle.
pub async fn cycles_handler<S>(
    State(state): State<AppState<S>>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    let cycles = state.storage().all_cycles().await?;
    assemble(state.storage(), cycles, locale.code(), &conditional).await
}

/// Handler for a single pack.
///
/// # Response
///
/// - `200 OK` - Envelope holding the pack
/// - `304 Not Modified` - Pack unchanged since `If-Modified-Since`
/// - `404 Not Found` - No pack has this code
pub async fn pack_handler<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    debug!(code = %code, locale = ?locale.code(), "Processing pack request");

    let pack = state.storage().pack_by_code(&code).await?;
    let pack = pack.ok_or(RestError::NotFound {
        kind: RecordKind::Pack,
        key: code,
    })?;

    assemble(state.storage(), vec![pack], locale.code(), &conditional).await
}

/// Handler for every pack.
pub async fn packs_handler<S>(
    State(state): State<AppState<S>>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    let packs = state.storage().all_packs().await?;
    assemble(state.storage(), packs, locale.code(), &conditional).await
}

/// Handler for a single card.
///
/// # Response
///
/// - `200 OK` - Envelope holding the card
/// - `304 Not Modified` - Card unchanged since `If-Modified-Since`
/// - `404 Not Found` - No card has this code
pub async fn card_handler<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    debug!(code = %code, locale = ?locale.code(), "Processing card request");

    let card = state.storage().card_by_code(&code).await?;
    let card = card.ok_or(RestError::NotFound {
        kind: RecordKind::Card,
        key: code,
    })?;

    assemble(state.storage(), vec![card], locale.code(), &conditional).await
}

/// Handler for every card.
///
/// The whole card pool is one response; there is no pagination.
pub async fn cards_handler<S>(
    State(state): State<AppState<S>>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    let cards = state.storage().all_cards().await?;
    assemble(state.storage(), cards, locale.code(), &conditional).await
}
