//! HTTP middleware for the public API.
//!
//! - [`conditional`] - `If-Modified-Since` handling

pub mod conditional;

pub use conditional::ConditionalHeaders;
