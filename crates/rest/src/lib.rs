//! # nrdb-rest - NetrunnerDB Public API 2.0
//!
//! This crate serves the read-only NetrunnerDB public API: card-game
//! reference data (cycles, packs, cards) and user content (decklists,
//! shared decks, the Most Wanted List), each wrapped in a JSON envelope
//! with optional translations and HTTP caching headers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nrdb_rest::{create_app, ServerConfig};
//! use nrdb_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("nrdb.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Method | URL Pattern | Result |
//! |--------|-------------|--------|
//! | GET | `/cycle/{cycle_code}` | One cycle, or 404 |
//! | GET | `/cycles` | All cycles |
//! | GET | `/pack/{pack_code}` | One pack, or 404 |
//! | GET | `/packs` | All packs |
//! | GET | `/card/{card_code}` | One card, or 404 |
//! | GET | `/cards` | All cards |
//! | GET | `/decklist/{decklist_id}` | One decklist, or 404 |
//! | GET | `/decklists/{date}` | Decklists created on that UTC day |
//! | GET | `/deck/{deck_id}` | One deck; 404 if missing, 403 if not shared |
//! | GET | `/mwl` | All MWL entries |
//!
//! Every endpoint accepts `?_locale=<code>`. Records with translations in
//! that locale gain a `_locale: {<code>: {field: value}}` member.
//!
//! ## Response Envelope
//!
//! ```json
//! {"version_number": "2.0", "data": [...], "total": 1, "success": true}
//! ```
//!
//! ## HTTP Headers
//!
//! - `Content-Type: application/json; charset=UTF-8`
//! - `Cache-Control: public`
//! - `Access-Control-Allow-Origin: *`
//! - `Last-Modified` - Latest `date_update` of the returned records
//! - `If-Modified-Since` - Answered with `304 Not Modified` when nothing changed
//!
//! ## Architecture
//!
//! - [`error`] - Error types and the JSON error body
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers per record kind
//! - [`middleware`] - Conditional request headers
//! - [`extractors`] - The `_locale` extractor
//! - [`responses`] - Envelope, headers and response assembly
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, http::Method};
use nrdb_persistence::core::RecordStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: RecordStore + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Arguments
///
/// * `storage` - The storage backend to use
/// * `config` - Server configuration
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: RecordStore + Send + Sync + 'static,
{
    create_app_with_shared(Arc::new(storage), config)
}

/// Creates the Axum application over an already shared store.
pub fn create_app_with_shared<S>(storage: Arc<S>, config: ServerConfig) -> Router
where
    S: RecordStore + Send + Sync + 'static,
{
    info!(
        "Creating public API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(storage, config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// Responses already carry `Access-Control-Allow-Origin: *`; the layer
/// answers preflight requests.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "nrdb_rest={level},nrdb_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
