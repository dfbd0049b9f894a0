// ABOUTME: Shared test utilities for the Dinner Tonight client integration tests
// ABOUTME: Logging init, JSON fixtures, and client/store wiring against a mock server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `dinner_tonight_client`
//!
//! Common setup to reduce duplication across integration tests: quiet logging,
//! JSON fixtures shaped like the service's payloads, and helpers wiring the
//! client and stores at a wiremock server.

use std::sync::Once;

use serde_json::{json, Value};
use wiremock::MockServer;

use dinner_tonight_client::api_client::ApiClient;
use dinner_tonight_client::config::ApiConfig;
use dinner_tonight_client::stores::{InventoryStore, RecipeSuggestionStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> ApiClient {
    init_test_logging();
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    })
}

/// Inventory store wired to the mock server
pub fn inventory_store(server: &MockServer) -> InventoryStore {
    InventoryStore::new(test_client(server))
}

/// Suggestion store wired to the mock server
pub fn suggestion_store(server: &MockServer) -> RecipeSuggestionStore {
    RecipeSuggestionStore::new(test_client(server))
}

/// Inventory item payload as the service serializes it
pub fn inventory_item_json(
    id: i64,
    ingredient: &str,
    ingredient_id: i64,
    quantity: Option<f64>,
    unit: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "ingredient": ingredient,
        "ingredient_id": ingredient_id,
        "quantity": quantity,
        "unit": unit,
    })
}

/// Ranked recipe match payload as the service serializes it
///
/// `missing_count` and `match_percent` are derived the way the service
/// derives them, so fixtures keep the server-side invariants.
pub fn recipe_match_json(id: i64, name: &str, total: u32, matched: u32, missing: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "cooking_time": 30,
        "total_ingredients": total,
        "matched_ingredients": matched,
        "missing_count": total - matched,
        "match_percent": f64::from(matched) / f64::from(total) * 100.0,
        "missing_ingredients": missing,
    })
}
