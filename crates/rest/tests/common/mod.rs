//! Shared fixtures for the HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use nrdb_persistence::backends::sqlite::SqliteBackend;
use nrdb_persistence::types::Dataset;
use nrdb_rest::ServerConfig;
use serde_json::json;

/// A small dataset covering every record kind.
///
/// - Cards 01001 (updated 2020-01-01) and 01002 (updated 2020-01-02).
/// - Card 01001 has French and German translations, the French `text`
///   is untranslated (null).
/// - Decklists 10..13 straddle 2020-01-15 UTC.
/// - Deck 20 belongs to a sharing user, deck 21 to one who does not share.
pub fn sample_dataset() -> Dataset {
    serde_json::from_value(json!({
        "cycles": [
            {"id": 1, "code": "core", "name": "Core Set", "position": 1, "size": 1,
             "date_update": "2019-06-01T00:00:00Z"},
            {"id": 2, "code": "genesis", "name": "Genesis", "position": 2, "size": 6,
             "rotated": true, "date_update": "2019-07-01T00:00:00Z"}
        ],
        "packs": [
            {"id": 1, "code": "core", "cycle_code": "core", "name": "Core Set",
             "position": 1, "size": 113, "date_release": "2012-09-06", "ffg_id": 1,
             "date_update": "2019-06-01T00:00:00Z"},
            {"id": 2, "code": "wla", "cycle_code": "genesis", "name": "What Lies Ahead",
             "position": 1, "size": 20, "date_release": "2012-12-14",
             "date_update": "2019-07-01T00:00:00Z"}
        ],
        "cards": [
            {"id": 1, "code": "01001", "title": "Noise: Hacker Extraordinaire",
             "pack_code": "core", "faction_code": "anarch", "side_code": "runner",
             "type_code": "identity", "position": 1, "quantity": 1, "deck_limit": 1,
             "text": "Whenever you install a <strong>virus</strong> program, the Corp trashes the top card of R&D.",
             "base_link": 0, "influence_limit": 15, "minimum_deck_size": 45,
             "date_update": "2020-01-01T00:00:00Z"},
            {"id": 2, "code": "01002", "title": "Déjà Vu", "pack_code": "core",
             "faction_code": "anarch", "side_code": "runner", "type_code": "event",
             "position": 2, "quantity": 2, "deck_limit": 3, "cost": 2, "faction_cost": 2,
             "date_update": "2020-01-02T00:00:00Z"}
        ],
        "users": [
            {"id": 7, "username": "sharer", "share_decks": true},
            {"id": 8, "username": "hoarder", "share_decks": false}
        ],
        "decklists": [
            {"id": 10, "date_creation": "2020-01-14T23:59:59Z",
             "date_update": "2020-01-14T23:59:59Z", "name": "Late Night",
             "user_id": 7, "user_name": "sharer", "cards": {"01001": 1}},
            {"id": 11, "date_creation": "2020-01-15T00:00:00Z",
             "date_update": "2020-01-15T00:00:00Z", "name": "Midnight",
             "user_id": 7, "user_name": "sharer", "cards": {"01001": 1, "01002": 3}},
            {"id": 12, "date_creation": "2020-01-15T18:30:00Z",
             "date_update": "2020-01-20T08:00:00Z", "name": "Evening",
             "user_id": 8, "user_name": "hoarder", "tournament_badge": true,
             "cards": {"01002": 3}},
            {"id": 13, "date_creation": "2020-01-16T00:00:00Z",
             "date_update": "2020-01-16T00:00:00Z", "name": "Next Day",
             "user_id": 8, "user_name": "hoarder", "cards": {}}
        ],
        "decks": [
            {"id": 20, "date_creation": "2020-02-01T00:00:00Z",
             "date_update": "2020-02-02T09:15:00Z", "name": "Shared Deck",
             "user_id": 7, "cards": {"01001": 1}},
            {"id": 21, "date_creation": "2020-02-01T00:00:00Z",
             "date_update": "2020-02-02T00:00:00Z", "name": "Secret Deck",
             "user_id": 8, "cards": {"01002": 3}}
        ],
        "mwl": [
            {"id": 1, "code": "NAPD_MWL_1.0", "name": "NAPD MWL 1.0", "active": false,
             "date_start": "2016-02-01", "date_update": "2016-02-01T00:00:00Z",
             "cards": {"01002": {"global_penalty": 1}}},
            {"id": 2, "code": "NAPD_MWL_2.0", "name": "NAPD MWL 2.0", "active": true,
             "date_start": "2017-04-12", "date_update": "2017-04-12T00:00:00Z",
             "cards": {"01002": {"deck_limit": 0}}}
        ],
        "translations": [
            {"object_class": "card", "foreign_key": 1, "locale": "fr", "field": "title",
             "content": "Noise : Hacker Extraordinaire"},
            {"object_class": "card", "foreign_key": 1, "locale": "fr", "field": "text",
             "content": null},
            {"object_class": "card", "foreign_key": 1, "locale": "de", "field": "title",
             "content": "Noise: Außergewöhnlicher Hacker"},
            {"object_class": "card", "foreign_key": 2, "locale": "ko", "field": "title",
             "content": null},
            {"object_class": "pack", "foreign_key": 1, "locale": "fr", "field": "name",
             "content": "Boîte de base"},
            {"object_class": "decklist", "foreign_key": 11, "locale": "fr",
             "field": "name", "content": "Minuit"}
        ]
    }))
    .expect("Sample dataset should parse")
}

/// Creates an empty in-memory backend.
pub fn empty_backend() -> SqliteBackend {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    backend
}

/// Creates a test server over `backend`.
pub fn server_for(backend: SqliteBackend) -> TestServer {
    let app = nrdb_rest::create_app_with_shared(Arc::new(backend), ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server seeded with [`sample_dataset`].
pub fn create_test_server() -> TestServer {
    let backend = empty_backend();
    backend
        .import_dataset(&sample_dataset())
        .expect("Failed to seed dataset");
    server_for(backend)
}
