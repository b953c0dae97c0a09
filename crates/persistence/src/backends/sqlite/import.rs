//! Dataset import for SQLite.

use rusqlite::{Transaction, params};
use serde::Serialize;

use crate::error::{StorageError, StorageResult};
use crate::types::Dataset;

use super::SqliteBackend;
use super::backend::{encode_timestamp, query_error};

fn encode<T: Serialize>(record: &T) -> StorageResult<Vec<u8>> {
    serde_json::to_vec(record)
        .map_err(|e| StorageError::serialization(format!("Failed to serialize record: {}", e)))
}

impl SqliteBackend {
    /// Loads a dataset, inserting or replacing records by primary key.
    ///
    /// The dataset is validated first and written in a single transaction,
    /// so a failed import leaves the database untouched. Returns the number
    /// of rows written.
    pub fn import_dataset(&self, dataset: &Dataset) -> StorageResult<usize> {
        dataset.validate()?;

        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| query_error("Failed to begin import", e))?;

        let written = write_dataset(&tx, dataset)?;

        tx.commit()
            .map_err(|e| query_error("Failed to commit import", e))?;

        tracing::info!(
            cycles = dataset.cycles.len(),
            packs = dataset.packs.len(),
            cards = dataset.cards.len(),
            users = dataset.users.len(),
            decklists = dataset.decklists.len(),
            decks = dataset.decks.len(),
            mwl = dataset.mwl.len(),
            translations = dataset.translations.len(),
            "Imported dataset"
        );

        Ok(written)
    }
}

fn write_dataset(tx: &Transaction<'_>, dataset: &Dataset) -> StorageResult<usize> {
    let mut written = 0;

    for cycle in &dataset.cycles {
        written += tx
            .execute(
                "INSERT INTO cycles (id, code, date_update, data) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                    code = excluded.code,
                    date_update = excluded.date_update,
                    data = excluded.data",
                params![
                    cycle.id,
                    cycle.code,
                    encode_timestamp(&cycle.date_update),
                    encode(cycle)?
                ],
            )
            .map_err(|e| query_error("Failed to import cycle", e))?;
    }

    for pack in &dataset.packs {
        written += tx
            .execute(
                "INSERT INTO packs (id, code, cycle_code, date_update, data)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    code = excluded.code,
                    cycle_code = excluded.cycle_code,
                    date_update = excluded.date_update,
                    data = excluded.data",
                params![
                    pack.id,
                    pack.code,
                    pack.cycle_code,
                    encode_timestamp(&pack.date_update),
                    encode(pack)?
                ],
            )
            .map_err(|e| query_error("Failed to import pack", e))?;
    }

    for card in &dataset.cards {
        written += tx
            .execute(
                "INSERT INTO cards (id, code, pack_code, date_update, data)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    code = excluded.code,
                    pack_code = excluded.pack_code,
                    date_update = excluded.date_update,
                    data = excluded.data",
                params![
                    card.id,
                    card.code,
                    card.pack_code,
                    encode_timestamp(&card.date_update),
                    encode(card)?
                ],
            )
            .map_err(|e| query_error("Failed to import card", e))?;
    }

    for user in &dataset.users {
        written += tx
            .execute(
                "INSERT INTO users (id, username, share_decks) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                    username = excluded.username,
                    share_decks = excluded.share_decks",
                params![user.id, user.username, user.share_decks],
            )
            .map_err(|e| query_error("Failed to import user", e))?;
    }

    for decklist in &dataset.decklists {
        written += tx
            .execute(
                "INSERT INTO decklists (id, user_id, date_creation, date_update, data)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    user_id = excluded.user_id,
                    date_creation = excluded.date_creation,
                    date_update = excluded.date_update,
                    data = excluded.data",
                params![
                    decklist.id,
                    decklist.user_id,
                    encode_timestamp(&decklist.date_creation),
                    encode_timestamp(&decklist.date_update),
                    encode(decklist)?
                ],
            )
            .map_err(|e| query_error("Failed to import decklist", e))?;
    }

    for deck in &dataset.decks {
        written += tx
            .execute(
                "INSERT INTO decks (id, user_id, date_creation, date_update, data)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    user_id = excluded.user_id,
                    date_creation = excluded.date_creation,
                    date_update = excluded.date_update,
                    data = excluded.data",
                params![
                    deck.id,
                    deck.user_id,
                    encode_timestamp(&deck.date_creation),
                    encode_timestamp(&deck.date_update),
                    encode(deck)?
                ],
            )
            .map_err(|e| query_error("Failed to import deck", e))?;
    }

    for entry in &dataset.mwl {
        written += tx
            .execute(
                "INSERT INTO mwl (id, code, date_update, data) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                    code = excluded.code,
                    date_update = excluded.date_update,
                    data = excluded.data",
                params![
                    entry.id,
                    entry.code,
                    encode_timestamp(&entry.date_update),
                    encode(entry)?
                ],
            )
            .map_err(|e| query_error("Failed to import MWL entry", e))?;
    }

    for translation in &dataset.translations {
        written += tx
            .execute(
                "INSERT INTO translations (object_class, foreign_key, locale, field, content)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(object_class, foreign_key, locale, field) DO UPDATE SET
                    content = excluded.content",
                params![
                    translation.object_class.as_str(),
                    translation.foreign_key,
                    translation.locale,
                    translation.field,
                    translation.content
                ],
            )
            .map_err(|e| query_error("Failed to import translation", e))?;
    }

    Ok(written)
}
