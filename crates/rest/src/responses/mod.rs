//! Response building for the public API.
//!
//! - [`envelope`] - The `{version_number, data, total, success}` envelope
//! - [`assembler`] - Records to HTTP response, with conditional handling
//! - [`headers`] - Caching and content headers

pub mod assembler;
pub mod envelope;
pub mod headers;

pub use assembler::assemble;
pub use envelope::ResponseEnvelope;
pub use headers::ApiHeaders;
