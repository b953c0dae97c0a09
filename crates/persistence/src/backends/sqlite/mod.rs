//! SQLite backend implementation.
//!
//! Implements every repository trait plus [`TranslationStore`](crate::core::TranslationStore)
//! on top of an r2d2 connection pool. Supports in-memory databases (tests)
//! and file-based databases (deployments).
//!
//! # Example
//!
//! ```no_run
//! use nrdb_persistence::backends::sqlite::SqliteBackend;
//! use nrdb_persistence::types::Dataset;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("nrdb.db")?;
//! backend.init_schema()?;
//!
//! let dataset = Dataset::load("dataset.json")?;
//! backend.import_dataset(&dataset)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE cards (
//!     id INTEGER PRIMARY KEY,
//!     code TEXT NOT NULL UNIQUE,
//!     pack_code TEXT NOT NULL,
//!     date_update TEXT NOT NULL,
//!     data BLOB NOT NULL  -- JSON body
//! );
//!
//! CREATE TABLE translations (
//!     object_class TEXT NOT NULL,
//!     foreign_key INTEGER NOT NULL,
//!     locale TEXT NOT NULL,
//!     field TEXT NOT NULL,
//!     content TEXT,
//!     PRIMARY KEY (object_class, foreign_key, locale, field)
//! );
//! ```
//!
//! `cycles`, `packs` and `mwl` follow the `cards` layout; `decklists` and
//! `decks` add `user_id` and `date_creation`.

mod backend;
mod import;
mod schema;
mod storage;
mod translation;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
