//! Typed record repositories.
//!
//! Each record kind has its own repository trait exposing only the lookups
//! the API performs on it. A backend implements all of them and is usable
//! wherever a [`RecordStore`] is required.
//!
//! Lookups never fail on absence: a missing record is `Ok(None)` and an
//! empty collection is `Ok(vec![])`. Errors mean the store itself failed.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Card, CreationRange, Cycle, Decklist, MwlEntry, OwnedDeck, Pack};

use super::translation::TranslationStore;

/// Lookups on release cycles.
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// Finds a cycle by its unique code.
    async fn cycle_by_code(&self, code: &str) -> StorageResult<Option<Cycle>>;

    /// Returns every cycle ordered by primary key.
    async fn all_cycles(&self) -> StorageResult<Vec<Cycle>>;
}

/// Lookups on packs.
#[async_trait]
pub trait PackRepository: Send + Sync {
    /// Finds a pack by its unique code.
    async fn pack_by_code(&self, code: &str) -> StorageResult<Option<Pack>>;

    /// Returns every pack ordered by primary key.
    async fn all_packs(&self) -> StorageResult<Vec<Pack>>;
}

/// Lookups on cards.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Finds a card by its unique code.
    async fn card_by_code(&self, code: &str) -> StorageResult<Option<Card>>;

    /// Returns every card ordered by primary key.
    async fn all_cards(&self) -> StorageResult<Vec<Card>>;
}

/// Lookups on published decklists.
#[async_trait]
pub trait DecklistRepository: Send + Sync {
    /// Finds a decklist by id.
    async fn decklist_by_id(&self, id: i64) -> StorageResult<Option<Decklist>>;

    /// Returns the decklists whose creation time falls in `range`, ordered
    /// by primary key.
    async fn decklists_created_in(&self, range: CreationRange) -> StorageResult<Vec<Decklist>>;
}

/// Lookups on private decks.
#[async_trait]
pub trait DeckRepository: Send + Sync {
    /// Finds a deck by id together with its owner.
    ///
    /// Sharing is not checked here; callers decide what an unshared deck
    /// means for them.
    async fn deck_by_id(&self, id: i64) -> StorageResult<Option<OwnedDeck>>;
}

/// Lookups on the Most Wanted List.
#[async_trait]
pub trait MwlRepository: Send + Sync {
    /// Returns every MWL entry ordered by primary key.
    async fn all_mwl_entries(&self) -> StorageResult<Vec<MwlEntry>>;
}

/// A complete store: every repository plus translations.
///
/// This is the bound the HTTP layer places on its backend.
#[async_trait]
pub trait RecordStore:
    CycleRepository
    + PackRepository
    + CardRepository
    + DecklistRepository
    + DeckRepository
    + MwlRepository
    + TranslationStore
{
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Verifies that the store can answer queries.
    async fn health_check(&self) -> StorageResult<()>;
}
