//! Core types for the persistence layer.
//!
//! - [`Record`] - The trait every exposed entity implements
//! - [`Cycle`], [`Pack`], [`Card`] - Catalog reference data
//! - [`Decklist`], [`Deck`], [`MwlEntry`] - User-generated content
//! - [`TranslationOverlay`] - Per-locale field translations
//! - [`CreationRange`] - Half-open date ranges for creation queries
//! - [`Dataset`] - Importable collection of all of the above

mod builder;
mod catalog;
mod dataset;
mod range;
mod record;
mod translation;

pub use builder::{CardQuantities, Deck, Decklist, MwlEntry, MwlRestriction, OwnedDeck, User};
pub use catalog::{Card, Cycle, Pack};
pub use dataset::Dataset;
pub use range::CreationRange;
pub use record::{Record, RecordKind};
pub use translation::{Translation, TranslationOverlay, drop_null_fields};
