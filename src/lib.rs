// ABOUTME: Library entry point for the Dinner Tonight client
// ABOUTME: Typed API bindings and reactive domain stores for the recipe-matching service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Dinner Tonight Client
//!
//! Client-side data-access and state-synchronization layer for the Dinner
//! Tonight kitchen-inventory / recipe-suggestion service. The crate mediates
//! between a consumer (CLI, UI, agent) and the remote REST API: it issues
//! typed HTTP requests, holds the authoritative in-memory copy of the remote
//! collections, and exposes reactive snapshots that consumers observe.
//!
//! ## Architecture
//!
//! - **`ApiClient`**: stateless binding from domain operations to HTTP
//!   requests, one method per remote endpoint
//! - **`InventoryStore`**: the canonical inventory list with
//!   refresh-after-write mutations
//! - **`RecipeSuggestionStore`**: ranked recipe matches with a tunable
//!   max-missing filter
//!
//! Stores publish snapshots (data, loading flag, error message) through
//! `tokio::sync::watch` channels; observers subscribe without coupling to any
//! rendering framework.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dinner_tonight_client::api_client::ApiClient;
//! use dinner_tonight_client::config::ApiConfig;
//! use dinner_tonight_client::stores::InventoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ApiConfig::default();
//!     let store = InventoryStore::new(ApiClient::new(&config));
//!
//!     store.fetch().await;
//!     for item in store.state().items {
//!         println!("{} (id {})", item.ingredient, item.ingredient_id);
//!     }
//! }
//! ```

/// HTTP binding from domain operations to the Dinner Tonight REST API
pub mod api_client;

/// Client configuration with environment loading
pub mod config;

/// Wire defaults and environment variable names
pub mod constants;

/// Unified error type for the binding layer
pub mod errors;

/// Wire data models
pub mod models;

/// Reactive domain stores
pub mod stores;

// Re-export commonly used types
pub use api_client::ApiClient;
pub use config::ApiConfig;
pub use errors::{ApiError, ApiResult};
pub use models::{Ingredient, InventoryItem, MutationResponse, Recipe, RecipeMatch};
pub use stores::{InventoryState, InventoryStore, RecipeSuggestionState, RecipeSuggestionStore};
