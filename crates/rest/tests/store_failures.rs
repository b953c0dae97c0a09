//! Behavior when the record store fails.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{StatusCode, header};
use axum_test::TestServer;
use nrdb_persistence::core::{
    CardRepository, CycleRepository, DeckRepository, DecklistRepository, MwlRepository,
    PackRepository, RecordStore, TranslationStore,
};
use nrdb_persistence::error::{BackendError, StorageError, StorageResult};
use nrdb_persistence::types::{
    Card, CreationRange, Cycle, Decklist, MwlEntry, OwnedDeck, Pack, RecordKind,
    TranslationOverlay,
};
use nrdb_rest::ServerConfig;
use serde_json::{Map, Value};

/// A store whose every query fails.
struct BrokenStore;

fn unavailable<T>() -> StorageResult<T> {
    Err(StorageError::Backend(BackendError::Unavailable {
        backend_name: "broken".to_string(),
        message: "database is locked".to_string(),
    }))
}

#[async_trait]
impl CycleRepository for BrokenStore {
    async fn cycle_by_code(&self, _code: &str) -> StorageResult<Option<Cycle>> {
        unavailable()
    }

    async fn all_cycles(&self) -> StorageResult<Vec<Cycle>> {
        unavailable()
    }
}

#[async_trait]
impl PackRepository for BrokenStore {
    async fn pack_by_code(&self, _code: &str) -> StorageResult<Option<Pack>> {
        unavailable()
    }

    async fn all_packs(&self) -> StorageResult<Vec<Pack>> {
        unavailable()
    }
}

#[async_trait]
impl CardRepository for BrokenStore {
    async fn card_by_code(&self, _code: &str) -> StorageResult<Option<Card>> {
        unavailable()
    }

    async fn all_cards(&self) -> StorageResult<Vec<Card>> {
        unavailable()
    }
}

#[async_trait]
impl DecklistRepository for BrokenStore {
    async fn decklist_by_id(&self, _id: i64) -> StorageResult<Option<Decklist>> {
        unavailable()
    }

    async fn decklists_created_in(&self, _range: CreationRange) -> StorageResult<Vec<Decklist>> {
        unavailable()
    }
}

#[async_trait]
impl DeckRepository for BrokenStore {
    async fn deck_by_id(&self, _id: i64) -> StorageResult<Option<OwnedDeck>> {
        unavailable()
    }
}

#[async_trait]
impl MwlRepository for BrokenStore {
    async fn all_mwl_entries(&self) -> StorageResult<Vec<MwlEntry>> {
        unavailable()
    }
}

#[async_trait]
impl TranslationStore for BrokenStore {
    async fn translations(&self, _kind: RecordKind, _id: i64) -> StorageResult<TranslationOverlay> {
        unavailable()
    }

    async fn locale_overlays(
        &self,
        _kind: RecordKind,
        _locale: &str,
        _ids: &[i64],
    ) -> StorageResult<HashMap<i64, Map<String, Value>>> {
        unavailable()
    }
}

#[async_trait]
impl RecordStore for BrokenStore {
    fn backend_name(&self) -> &'static str {
        "broken"
    }

    async fn health_check(&self) -> StorageResult<()> {
        unavailable()
    }
}

fn create_test_server() -> TestServer {
    let app = nrdb_rest::create_app_with_shared(Arc::new(BrokenStore), ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_store_failure_returns_500() {
    let server = create_test_server();

    let response = server.get("/cards").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=UTF-8"
    );
    let body: Value = response.json();
    assert_eq!(body["status"], 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_store_failure_is_not_leaked() {
    let server = create_test_server();

    let text = server.get("/deck/1").await.text();

    assert!(!text.contains("database is locked"));
}

#[tokio::test]
async fn test_readiness_reports_unavailable() {
    let server = create_test_server();

    let response = server.get("/_readiness").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>()["status"], "unavailable");
}

#[tokio::test]
async fn test_liveness_ignores_store() {
    let server = create_test_server();

    server.get("/_liveness").await.assert_status_ok();
}
