//! User-generated content: decklists, decks and the Most Wanted List.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Record, RecordKind};

/// Card code to number of copies.
pub type CardQuantities = BTreeMap<String, u32>;

/// A registered user, as far as the public API cares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Primary key.
    pub id: i64,
    /// Public user name.
    pub username: String,
    /// Whether the user allows their private decks to be read by anyone
    /// who knows the deck id.
    #[serde(default)]
    pub share_decks: bool,
}

/// A published decklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decklist {
    /// Primary key.
    pub id: i64,
    /// Publication time.
    pub date_creation: DateTime<Utc>,
    /// Last modification time.
    pub date_update: DateTime<Utc>,
    /// Title.
    pub name: String,
    /// Markdown description.
    #[serde(default)]
    pub description: String,
    /// Author id.
    pub user_id: i64,
    /// Author name at publication time.
    pub user_name: String,
    /// Whether the decklist placed in a sanctioned tournament.
    #[serde(default)]
    pub tournament_badge: bool,
    /// Card composition.
    pub cards: CardQuantities,
    /// Code of the MWL the decklist was built against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mwl_code: Option<String>,
}

impl Record for Decklist {
    const KIND: RecordKind = RecordKind::Decklist;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn date_update(&self) -> DateTime<Utc> {
        self.date_update
    }
}

/// A private deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Primary key.
    pub id: i64,
    /// Creation time.
    pub date_creation: DateTime<Utc>,
    /// Last modification time.
    pub date_update: DateTime<Utc>,
    /// Title.
    pub name: String,
    /// Markdown description.
    #[serde(default)]
    pub description: String,
    /// Owner id.
    pub user_id: i64,
    /// Card composition.
    pub cards: CardQuantities,
    /// Code of the MWL the deck is built against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mwl_code: Option<String>,
}

impl Record for Deck {
    const KIND: RecordKind = RecordKind::Deck;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn date_update(&self) -> DateTime<Utc> {
        self.date_update
    }
}

/// A deck together with the user that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedDeck {
    /// The deck itself.
    pub deck: Deck,
    /// Its owner.
    pub owner: User,
}

impl OwnedDeck {
    /// Returns true when the owner has opted into sharing decks.
    pub fn is_shared(&self) -> bool {
        self.owner.share_decks
    }
}

/// How a single card is restricted by an MWL entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MwlRestriction {
    /// Maximum copies allowed, `0` meaning banned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_limit: Option<u32>,
    /// Whether the card counts against the single restricted slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_restricted: Option<u32>,
    /// Influence added regardless of faction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_faction_cost: Option<u32>,
    /// Legacy global influence penalty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_penalty: Option<u32>,
}

/// One version of the Most Wanted List.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MwlEntry {
    /// Primary key.
    pub id: i64,
    /// Unique code, e.g. `"NAPD_MWL_1.2"`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Whether this is the list currently in force.
    #[serde(default)]
    pub active: bool,
    /// First day the list applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<NaiveDate>,
    /// Last modification time.
    pub date_update: DateTime<Utc>,
    /// Restricted cards keyed by card code.
    pub cards: BTreeMap<String, MwlRestriction>,
}

impl Record for MwlEntry {
    const KIND: RecordKind = RecordKind::Mwl;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn date_update(&self) -> DateTime<Utc> {
        self.date_update
    }
}
