//! The [`Record`] trait shared by every entity the API exposes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{StorageError, StorageResult};

/// The kinds of record the API serves.
///
/// The kind doubles as the `object_class` key of the translation table, so
/// its string form is persisted and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A release cycle.
    Cycle,
    /// A data pack or expansion.
    Pack,
    /// A single card.
    Card,
    /// A published decklist.
    Decklist,
    /// A private deck.
    Deck,
    /// A Most Wanted List entry.
    Mwl,
}

impl RecordKind {
    /// Returns the persisted identifier of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Cycle => "cycle",
            RecordKind::Pack => "pack",
            RecordKind::Card => "card",
            RecordKind::Decklist => "decklist",
            RecordKind::Deck => "deck",
            RecordKind::Mwl => "mwl",
        }
    }

    /// Returns the capitalised name used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Cycle => "Cycle",
            RecordKind::Pack => "Pack",
            RecordKind::Card => "Card",
            RecordKind::Decklist => "Decklist",
            RecordKind::Deck => "Deck",
            RecordKind::Mwl => "MWL",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain entity that can be placed in a response envelope.
///
/// Records are immutable snapshots owned by the store. The serialized form
/// is derived from the `Serialize` impl, minus the fields listed in
/// [`Record::PRIVATE_FIELDS`].
pub trait Record: Serialize + Send + Sync {
    /// The kind of this record.
    const KIND: RecordKind;

    /// Fields that are stored but never exposed through the API.
    const PRIVATE_FIELDS: &'static [&'static str] = &[];

    /// The numeric primary key, used to look up translations.
    fn record_id(&self) -> i64;

    /// When this record was last modified.
    fn date_update(&self) -> DateTime<Utc>;

    /// Serializes the record into the JSON object exposed by the API.
    fn to_json_object(&self) -> StorageResult<Map<String, Value>> {
        match serde_json::to_value(self).map_err(StorageError::serialization)? {
            Value::Object(mut map) => {
                for field in Self::PRIVATE_FIELDS {
                    map.remove(*field);
                }
                Ok(map)
            }
            other => Err(StorageError::serialization(format!(
                "{} serialized to a non-object value: {}",
                Self::KIND,
                other
            ))),
        }
    }
}
