//! Route configuration for the public API.

pub mod api_routes;

pub use api_routes::create_routes;
