//! Private deck handler: `GET /deck/{deck_id}`.

use axum::{
    extract::{Path, State},
    response::Response,
};
use nrdb_persistence::core::RecordStore;
use nrdb_persistence::types::RecordKind;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::extractors::Locale;
use crate::middleware::conditional::ConditionalHeaders;
use crate::responses::assemble;
use crate::state::AppState;

use super::parse_id;

/// Handler for a single private deck.
///
/// A deck is readable only when its owner shares decks. Existence is
/// checked first, so an unknown id is 404 and an unshared one is 403.
///
/// # Response
///
/// - `200 OK` - Envelope holding the deck
/// - `304 Not Modified` - Deck unchanged since `If-Modified-Since`
/// - `400 Bad Request` - Id is not an integer
/// - `403 Forbidden` - Owner does not share decks
/// - `404 Not Found` - No deck has this id
pub async fn deck_handler<S>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    let id = parse_id(RecordKind::Deck, &raw_id)?;
    debug!(id, locale = ?locale.code(), "Processing deck request");

    let owned = state.storage().deck_by_id(id).await?;
    let owned = owned.ok_or(RestError::NotFound {
        kind: RecordKind::Deck,
        key: raw_id,
    })?;

    if !owned.is_shared() {
        warn!(id, owner = owned.owner.id, "Deck owner does not share decks");
        return Err(RestError::Forbidden {
            message: "Deck not shared".to_string(),
        });
    }

    assemble(state.storage(), vec![owned.deck], locale.code(), &conditional).await
}
