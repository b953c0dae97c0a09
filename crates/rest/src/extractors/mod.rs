//! Axum extractors for API-specific request data.
//!
//! - [`Locale`] - The `_locale` query parameter

mod locale;

pub use locale::Locale;
