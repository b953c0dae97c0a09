//! Reference data: cycles, packs and cards.
//!
//! Catalog records are addressed by their human-readable `code`. The numeric
//! `id` and `date_update` are stored for translation lookup and freshness
//! computation but are not part of the serialized form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Record, RecordKind};

const CATALOG_PRIVATE_FIELDS: &[&str] = &["id", "date_update"];

/// A release cycle grouping several packs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// Primary key.
    pub id: i64,
    /// Unique code, e.g. `"genesis"`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Release order.
    pub position: u32,
    /// Number of packs in the cycle.
    pub size: u32,
    /// Whether the cycle has rotated out of the standard format.
    #[serde(default)]
    pub rotated: bool,
    /// Last modification time.
    pub date_update: DateTime<Utc>,
}

impl Record for Cycle {
    const KIND: RecordKind = RecordKind::Cycle;
    const PRIVATE_FIELDS: &'static [&'static str] = CATALOG_PRIVATE_FIELDS;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn date_update(&self) -> DateTime<Utc> {
        self.date_update
    }
}

/// A data pack or expansion belonging to a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    /// Primary key.
    pub id: i64,
    /// Unique code, e.g. `"wla"`.
    pub code: String,
    /// Code of the owning cycle.
    pub cycle_code: String,
    /// Display name.
    pub name: String,
    /// Position inside the cycle.
    pub position: u32,
    /// Number of distinct cards.
    pub size: u32,
    /// Release date, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_release: Option<NaiveDate>,
    /// Publisher product identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffg_id: Option<u32>,
    /// Last modification time.
    pub date_update: DateTime<Utc>,
}

impl Record for Pack {
    const KIND: RecordKind = RecordKind::Pack;
    const PRIVATE_FIELDS: &'static [&'static str] = CATALOG_PRIVATE_FIELDS;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn date_update(&self) -> DateTime<Utc> {
        self.date_update
    }
}

/// A single card.
///
/// Stat fields only apply to some card types and are omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Primary key.
    pub id: i64,
    /// Unique five-digit code, e.g. `"01001"`.
    pub code: String,
    /// Card title.
    pub title: String,
    /// Code of the pack the card was printed in.
    pub pack_code: String,
    /// Faction code, e.g. `"haas-bioroid"`.
    pub faction_code: String,
    /// Side code, `"corp"` or `"runner"`.
    pub side_code: String,
    /// Type code, e.g. `"ice"`.
    pub type_code: String,
    /// Position inside the pack.
    pub position: u32,
    /// Copies in the pack.
    pub quantity: u32,
    /// Maximum copies per deck.
    pub deck_limit: u32,
    /// Whether the card is unique.
    #[serde(default)]
    pub uniqueness: bool,
    /// Subtypes, e.g. `"Code Gate - AP"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Flavor text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// Artist credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustrator: Option<String>,
    /// Play or rez cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i32>,
    /// Ice or icebreaker strength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
    /// Advancements needed to score an agenda.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advancement_cost: Option<i32>,
    /// Points an agenda is worth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda_points: Option<i32>,
    /// Memory units a program uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_cost: Option<i32>,
    /// Credits to trash the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trash_cost: Option<i32>,
    /// Identity link strength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_link: Option<i32>,
    /// Identity influence limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence_limit: Option<i32>,
    /// Identity minimum deck size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_deck_size: Option<i32>,
    /// Influence cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_cost: Option<i32>,
    /// Last modification time.
    pub date_update: DateTime<Utc>,
}

impl Record for Card {
    const KIND: RecordKind = RecordKind::Card;
    const PRIVATE_FIELDS: &'static [&'static str] = CATALOG_PRIVATE_FIELDS;

    fn record_id(&self) -> i64 {
        self.id
    }

    fn date_update(&self) -> DateTime<Utc> {
        self.date_update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_card() -> Card {
        serde_json::from_value(json!({
            "id": 1,
            "code": "01001",
            "title": "Noise: Hacker Extraordinaire",
            "pack_code": "core",
            "faction_code": "anarch",
            "side_code": "runner",
            "type_code": "identity",
            "position": 1,
            "quantity": 1,
            "deck_limit": 1,
            "base_link": 0,
            "influence_limit": 15,
            "minimum_deck_size": 45,
            "date_update": "2020-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_card_serialization_omits_unset_stats() {
        let object = sample_card().to_json_object().unwrap();
        assert_eq!(object["code"], "01001");
        assert_eq!(object["influence_limit"], 15);
        assert!(!object.contains_key("cost"));
        assert!(!object.contains_key("text"));
    }

    #[test]
    fn test_catalog_serialization_hides_storage_fields() {
        let object = sample_card().to_json_object().unwrap();
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("date_update"));
    }

    #[test]
    fn test_pack_release_date_format() {
        let pack: Pack = serde_json::from_value(json!({
            "id": 3,
            "code": "wla",
            "cycle_code": "genesis",
            "name": "What Lies Ahead",
            "position": 1,
            "size": 20,
            "date_release": "2012-12-14",
            "date_update": "2020-01-01T00:00:00Z"
        }))
        .unwrap();
        let object = pack.to_json_object().unwrap();
        assert_eq!(object["date_release"], "2012-12-14");
        assert!(!object.contains_key("ffg_id"));
    }
}
