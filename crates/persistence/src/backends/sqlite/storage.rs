//! Repository implementations for SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, Params, params};
use serde::de::DeserializeOwned;

use crate::core::{
    CardRepository, CycleRepository, DeckRepository, DecklistRepository, MwlRepository,
    PackRepository, RecordStore,
};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::{
    Card, CreationRange, Cycle, Deck, Decklist, MwlEntry, OwnedDeck, Pack, User,
};

use super::SqliteBackend;
use super::backend::{BACKEND_NAME, decode, encode_timestamp, internal_error, query_error};

impl SqliteBackend {
    /// Runs a query whose first column is a JSON body and decodes at most
    /// one row.
    fn fetch_one<T, P>(&self, sql: &str, params: P) -> StorageResult<Option<T>>
    where
        T: DeserializeOwned,
        P: Params,
    {
        let conn = self.get_connection()?;
        let data: Option<Vec<u8>> = conn
            .query_row(sql, params, |row| row.get(0))
            .optional()
            .map_err(|e| query_error("Failed to read record", e))?;
        data.map(|data| decode(&data)).transpose()
    }

    /// Runs a query whose first column is a JSON body and decodes every row.
    fn fetch_all<T, P>(&self, sql: &str, params: P) -> StorageResult<Vec<T>>
    where
        T: DeserializeOwned,
        P: Params,
    {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| query_error("Failed to prepare query", e))?;
        let rows = stmt
            .query_map(params, |row| row.get::<_, Vec<u8>>(0))
            .map_err(|e| query_error("Failed to list records", e))?;

        let mut records = Vec::new();
        for row in rows {
            let data = row.map_err(|e| query_error("Failed to read row", e))?;
            records.push(decode(&data)?);
        }
        Ok(records)
    }
}

#[async_trait]
impl CycleRepository for SqliteBackend {
    async fn cycle_by_code(&self, code: &str) -> StorageResult<Option<Cycle>> {
        self.fetch_one("SELECT data FROM cycles WHERE code = ?1", params![code])
    }

    async fn all_cycles(&self) -> StorageResult<Vec<Cycle>> {
        self.fetch_all("SELECT data FROM cycles ORDER BY id", [])
    }
}

#[async_trait]
impl PackRepository for SqliteBackend {
    async fn pack_by_code(&self, code: &str) -> StorageResult<Option<Pack>> {
        self.fetch_one("SELECT data FROM packs WHERE code = ?1", params![code])
    }

    async fn all_packs(&self) -> StorageResult<Vec<Pack>> {
        self.fetch_all("SELECT data FROM packs ORDER BY id", [])
    }
}

#[async_trait]
impl CardRepository for SqliteBackend {
    async fn card_by_code(&self, code: &str) -> StorageResult<Option<Card>> {
        self.fetch_one("SELECT data FROM cards WHERE code = ?1", params![code])
    }

    async fn all_cards(&self) -> StorageResult<Vec<Card>> {
        self.fetch_all("SELECT data FROM cards ORDER BY id", [])
    }
}

#[async_trait]
impl DecklistRepository for SqliteBackend {
    async fn decklist_by_id(&self, id: i64) -> StorageResult<Option<Decklist>> {
        self.fetch_one("SELECT data FROM decklists WHERE id = ?1", params![id])
    }

    async fn decklists_created_in(&self, range: CreationRange) -> StorageResult<Vec<Decklist>> {
        self.fetch_all(
            "SELECT data FROM decklists
             WHERE date_creation >= ?1 AND date_creation < ?2
             ORDER BY id",
            params![
                encode_timestamp(&range.start()),
                encode_timestamp(&range.end())
            ],
        )
    }
}

#[async_trait]
impl DeckRepository for SqliteBackend {
    async fn deck_by_id(&self, id: i64) -> StorageResult<Option<OwnedDeck>> {
        let conn = self.get_connection()?;
        let row = conn
            .query_row(
                "SELECT d.data, u.id, u.username, u.share_decks
                 FROM decks d
                 JOIN users u ON u.id = d.user_id
                 WHERE d.id = ?1",
                params![id],
                |row| {
                    let data: Vec<u8> = row.get(0)?;
                    let owner = User {
                        id: row.get(1)?,
                        username: row.get(2)?,
                        share_decks: row.get(3)?,
                    };
                    Ok((data, owner))
                },
            )
            .optional()
            .map_err(|e| query_error("Failed to read deck", e))?;

        match row {
            Some((data, owner)) => {
                let deck: Deck = decode(&data)?;
                Ok(Some(OwnedDeck { deck, owner }))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl MwlRepository for SqliteBackend {
    async fn all_mwl_entries(&self) -> StorageResult<Vec<MwlEntry>> {
        self.fetch_all("SELECT data FROM mwl ORDER BY id", [])
    }
}

#[async_trait]
impl RecordStore for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection().map_err(|_| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "Failed to get connection".to_string(),
            })
        })?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| internal_error(format!("Health check failed: {}", e)))
    }
}
