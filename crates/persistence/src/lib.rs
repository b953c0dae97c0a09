//! NetrunnerDB Persistence Layer
//!
//! This crate stores the records served by the NetrunnerDB public API and
//! their per-locale translations, behind typed repository traits.
//!
//! # Features
//!
//! - **Typed repositories**: one trait per record kind, no stringly typed dispatch
//! - **Translations**: per-record locale overlays with batched lookup
//! - **Import**: load a JSON [`Dataset`](types::Dataset) in one transaction
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`types`] - Records, translations, date ranges and datasets
//! - [`error`] - Error types for all operations
//! - [`core`] - Repository and translation traits
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use nrdb_persistence::backends::sqlite::SqliteBackend;
//! use nrdb_persistence::core::CardRepository;
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! if let Some(card) = backend.card_by_code("01001").await? {
//!     println!("{}", card.title);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

pub use error::{StorageError, StorageResult};
