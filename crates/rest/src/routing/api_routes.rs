//! API route configuration.

use axum::{Router, routing::get};
use nrdb_persistence::core::RecordStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all public API routes.
///
/// # Routes
///
/// ## Records
/// - `GET /cycle/{cycle_code}`, `GET /cycles`
/// - `GET /pack/{pack_code}`, `GET /packs`
/// - `GET /card/{card_code}`, `GET /cards`
/// - `GET /decklist/{decklist_id}`, `GET /decklists/{date}`
/// - `GET /deck/{deck_id}`
/// - `GET /mwl`
///
/// ## Operations
/// - `GET /health`, `GET /_liveness`, `GET /_readiness`
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RecordStore + Send + Sync + 'static,
{
    Router::new()
        // Catalog
        .route("/cycle/{cycle_code}", get(handlers::cycle_handler::<S>))
        .route("/cycles", get(handlers::cycles_handler::<S>))
        .route("/pack/{pack_code}", get(handlers::pack_handler::<S>))
        .route("/packs", get(handlers::packs_handler::<S>))
        .route("/card/{card_code}", get(handlers::card_handler::<S>))
        .route("/cards", get(handlers::cards_handler::<S>))
        // User content
        .route(
            "/decklist/{decklist_id}",
            get(handlers::decklist_handler::<S>),
        )
        .route(
            "/decklists/{date}",
            get(handlers::decklists_by_date_handler::<S>),
        )
        .route("/deck/{deck_id}", get(handlers::deck_handler::<S>))
        .route("/mwl", get(handlers::mwl_handler::<S>))
        // Operations
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .with_state(state)
}
