//! Most Wanted List handler: `GET /mwl`.

use axum::{extract::State, response::Response};
use nrdb_persistence::core::RecordStore;

use crate::error::RestResult;
use crate::extractors::Locale;
use crate::middleware::conditional::ConditionalHeaders;
use crate::responses::assemble;
use crate::state::AppState;

/// Handler for every MWL entry, in the order they were published.
pub async fn mwl_handler<S>(
    State(state): State<AppState<S>>,
    locale: Locale,
    conditional: ConditionalHeaders,
) -> RestResult<Response>
where
    S: RecordStore + Send + Sync,
{
    let entries = state.storage().all_mwl_entries().await?;
    assemble(state.storage(), entries, locale.code(), &conditional).await
}
