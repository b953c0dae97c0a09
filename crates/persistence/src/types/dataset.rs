//! Importable datasets.
//!
//! A dataset is a single JSON document holding any subset of the record
//! collections. It is how a fresh database gets populated, and how tests
//! seed a backend.
//!
//! ```
//! use nrdb_persistence::types::Dataset;
//!
//! let dataset = Dataset::from_json_str(r#"{"users": [{"id": 1, "username": "ana"}]}"#).unwrap();
//! assert_eq!(dataset.users.len(), 1);
//! assert!(dataset.cards.is_empty());
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::builder::{Deck, Decklist, MwlEntry, User};
use super::catalog::{Card, Cycle, Pack};
use super::translation::Translation;
use crate::error::ImportError;

/// Every collection that can be imported into a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Release cycles.
    pub cycles: Vec<Cycle>,
    /// Packs.
    pub packs: Vec<Pack>,
    /// Cards.
    pub cards: Vec<Card>,
    /// Users owning decks and decklists.
    pub users: Vec<User>,
    /// Published decklists.
    pub decklists: Vec<Decklist>,
    /// Private decks.
    pub decks: Vec<Deck>,
    /// Most Wanted List entries.
    pub mwl: Vec<MwlEntry>,
    /// Field translations for any of the above.
    pub translations: Vec<Translation>,
}

impl Dataset {
    /// Parses a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a dataset file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Total number of records, translations included.
    pub fn len(&self) -> usize {
        self.cycles.len()
            + self.packs.len()
            + self.cards.len()
            + self.users.len()
            + self.decklists.len()
            + self.decks.len()
            + self.mwl.len()
            + self.translations.len()
    }

    /// Returns true when the dataset holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that decks, packs and cards point at records in this dataset.
    ///
    /// Decks must resolve their owner or the sharing check cannot run.
    /// Pack and card parents are only checked when the dataset carries the
    /// parent collection at all, so partial catalog updates stay importable.
    pub fn validate(&self) -> Result<(), ImportError> {
        let user_ids: HashSet<i64> = self.users.iter().map(|u| u.id).collect();
        for deck in &self.decks {
            if !user_ids.contains(&deck.user_id) {
                return Err(ImportError::DanglingReference {
                    kind: "deck",
                    key: deck.id.to_string(),
                    target: format!("user {}", deck.user_id),
                });
            }
        }

        if !self.cycles.is_empty() {
            let cycle_codes: HashSet<&str> = self.cycles.iter().map(|c| c.code.as_str()).collect();
            for pack in &self.packs {
                if !cycle_codes.contains(pack.cycle_code.as_str()) {
                    return Err(ImportError::DanglingReference {
                        kind: "pack",
                        key: pack.code.clone(),
                        target: format!("cycle {}", pack.cycle_code),
                    });
                }
            }
        }

        if !self.packs.is_empty() {
            let pack_codes: HashSet<&str> = self.packs.iter().map(|p| p.code.as_str()).collect();
            for card in &self.cards {
                if !pack_codes.contains(card.pack_code.as_str()) {
                    return Err(ImportError::DanglingReference {
                        kind: "card",
                        key: card.code.clone(),
                        target: format!("pack {}", card.pack_code),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_empty_dataset() {
        let dataset = Dataset::from_json_str("{}").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_deck_without_owner_is_rejected() {
        let dataset = Dataset::from_json_str(
            r#"{"decks": [{
                "id": 5,
                "date_creation": "2020-01-15T10:30:00Z",
                "date_update": "2020-01-15T10:30:00Z",
                "name": "Orphan",
                "user_id": 99,
                "cards": {}
            }]}"#,
        )
        .unwrap();

        let err = dataset.validate().unwrap_err();
        assert!(matches!(err, ImportError::DanglingReference { kind: "deck", .. }));
    }

    #[test]
    fn test_cards_checked_only_when_packs_present() {
        let json = r#"{"cards": [{
            "id": 1, "code": "01001", "title": "Noise", "pack_code": "core",
            "faction_code": "anarch", "side_code": "runner", "type_code": "identity",
            "position": 1, "quantity": 1, "deck_limit": 1,
            "date_update": "2020-01-01T00:00:00Z"
        }]}"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = Dataset::from_json_str("{\"cycles\": 3}").unwrap_err();
        assert!(matches!(err, ImportError::InvalidDataset(_)));
    }
}
