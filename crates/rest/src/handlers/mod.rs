//! HTTP request handlers.
//!
//! - [`catalog`] - Cycles, packs and cards
//! - [`decklists`] - Published decklists, by id or by day
//! - [`decks`] - Private decks of users who share them
//! - [`mwl`] - The Most Wanted List
//! - [`health`] - Health check endpoints

pub mod catalog;
pub mod decklists;
pub mod decks;
pub mod health;
pub mod mwl;

pub use catalog::{
    card_handler, cards_handler, cycle_handler, cycles_handler, pack_handler, packs_handler,
};
pub use decklists::{decklist_handler, decklists_by_date_handler};
pub use decks::deck_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use mwl::mwl_handler;

use nrdb_persistence::types::RecordKind;

use crate::error::{RestError, RestResult};

/// Parses a numeric id path segment.
fn parse_id(kind: RecordKind, raw: &str) -> RestResult<i64> {
    raw.parse().map_err(|_| RestError::BadRequest {
        message: format!("Invalid {} id '{}'", kind.as_str(), raw),
    })
}
