//! Core storage traits.
//!
//! - [`CycleRepository`], [`PackRepository`], [`CardRepository`] - Catalog lookups by code
//! - [`DecklistRepository`], [`DeckRepository`] - Lookups by id and creation date
//! - [`MwlRepository`] - The Most Wanted List
//! - [`TranslationStore`] - Locale overlays
//! - [`RecordStore`] - Everything above, as one bound
//!
//! ```text
//! RecordStore
//! ├── CycleRepository
//! ├── PackRepository
//! ├── CardRepository
//! ├── DecklistRepository
//! ├── DeckRepository
//! ├── MwlRepository
//! └── TranslationStore
//! ```

pub mod storage;
pub mod translation;

pub use storage::{
    CardRepository, CycleRepository, DeckRepository, DecklistRepository, MwlRepository,
    PackRepository, RecordStore,
};
pub use translation::TranslationStore;
