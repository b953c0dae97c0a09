//! SQLite schema definitions and migrations.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
        tracing::info!(version = SCHEMA_VERSION, "Created SQLite schema");
    } else if current_version > SCHEMA_VERSION {
        return Err(migration_error(format!(
            "database schema version {} is newer than supported version {}",
            current_version, SCHEMA_VERSION
        )));
    }

    Ok(())
}

fn migration_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| migration_error(format!("Failed to clear schema_version: {}", e)))?;

    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(|e| migration_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1).
///
/// Every record table keeps its lookup columns next to the JSON body
/// (`data`). Timestamps are RFC 3339 UTC strings with second precision.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS cycles (
            id INTEGER PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            date_update TEXT NOT NULL,
            data BLOB NOT NULL
        );

        CREATE TABLE IF NOT EXISTS packs (
            id INTEGER PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            cycle_code TEXT NOT NULL,
            date_update TEXT NOT NULL,
            data BLOB NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            pack_code TEXT NOT NULL,
            date_update TEXT NOT NULL,
            data BLOB NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            username TEXT NOT NULL,
            share_decks INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS decklists (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            date_creation TEXT NOT NULL,
            date_update TEXT NOT NULL,
            data BLOB NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_decklists_date_creation
            ON decklists(date_creation);

        CREATE TABLE IF NOT EXISTS decks (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id),
            date_creation TEXT NOT NULL,
            date_update TEXT NOT NULL,
            data BLOB NOT NULL
        );

        CREATE TABLE IF NOT EXISTS mwl (
            id INTEGER PRIMARY KEY,
            code TEXT NOT NULL UNIQUE,
            date_update TEXT NOT NULL,
            data BLOB NOT NULL
        );

        CREATE TABLE IF NOT EXISTS translations (
            object_class TEXT NOT NULL,
            foreign_key INTEGER NOT NULL,
            locale TEXT NOT NULL,
            field TEXT NOT NULL,
            content TEXT,
            PRIMARY KEY (object_class, foreign_key, locale, field)
        );

        CREATE INDEX IF NOT EXISTS idx_translations_locale
            ON translations(object_class, locale, foreign_key);",
    )
    .map_err(|e| migration_error(format!("Failed to create schema: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_database_gets_current_version() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        set_schema_version(&conn, SCHEMA_VERSION + 1).unwrap();
        assert!(initialize_schema(&conn).is_err());
    }

    #[test]
    fn test_all_tables_created() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        for table in [
            "cycles",
            "packs",
            "cards",
            "users",
            "decklists",
            "decks",
            "mwl",
            "translations",
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }
    }
}
