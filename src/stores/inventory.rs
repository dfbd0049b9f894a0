// ABOUTME: Inventory store owning the canonical client-side copy of kitchen inventory
// ABOUTME: Fetch and mutate operations with refresh-after-write consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Inventory Store
//!
//! Owns the canonical list of [`InventoryItem`]s. Reads replace the list
//! wholesale; mutations round-trip through the service and then re-fetch the
//! full snapshot rather than patching locally (refresh-after-write).
//!
//! Mutation results are reported two ways: the returned `bool` says whether
//! the write itself succeeded, while the `error` field of the published state
//! carries the user-facing message. A failed refresh after a successful write
//! does not turn the `bool` false.

use tokio::sync::watch;
use tracing::{debug, error, instrument};

use crate::api_client::ApiClient;
use crate::models::InventoryItem;

/// Snapshot of inventory state published to observers
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    /// Current inventory items, replaced wholesale on every fetch
    pub items: Vec<InventoryItem>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Message of the most recent failure, cleared when a fetch starts
    pub error: Option<String>,
}

/// Store owning the client-side inventory collection
///
/// Cloning produces another handle onto the same state channel.
#[derive(Clone)]
pub struct InventoryStore {
    api: ApiClient,
    state: watch::Sender<InventoryState>,
}

impl InventoryStore {
    /// Create a store backed by the given client
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(InventoryState::default());
        Self { api, state }
    }

    /// Current snapshot
    #[must_use]
    pub fn state(&self) -> InventoryState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    ///
    /// The receiver observes every published transition; `loading` flips to
    /// `true` when a fetch starts and back to `false` when it settles.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<InventoryState> {
        self.state.subscribe()
    }

    /// Fetch the full inventory snapshot from the service
    ///
    /// On success the item list is replaced wholesale; on failure the list is
    /// left untouched and `error` carries the failure message. `loading`
    /// clears on settlement either way.
    #[instrument(skip(self), fields(store = "inventory"))]
    pub async fn fetch(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = self.api.get_inventory().await;

        if let Err(e) = &result {
            error!("failed to fetch inventory: {e}");
        }

        self.state.send_modify(|state| {
            state.loading = false;
            match result {
                Ok(items) => state.items = items,
                Err(e) => state.error = Some(e.to_string()),
            }
        });
    }

    /// Add an ingredient to the inventory, then refresh
    ///
    /// Returns whether the write itself succeeded. On success the full
    /// inventory is re-fetched before returning; on failure `error` is set to
    /// the service's `detail` message when present, otherwise
    /// "Failed to add ingredient".
    #[instrument(skip(self), fields(store = "inventory"))]
    pub async fn add_ingredient(
        &self,
        ingredient_id: i64,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> bool {
        match self
            .api
            .add_inventory_item(ingredient_id, quantity, unit)
            .await
        {
            Ok(response) => {
                debug!("added ingredient {ingredient_id}: {}", response.message);
                self.fetch().await;
                true
            }
            Err(e) => {
                error!("failed to add ingredient {ingredient_id}: {e}");
                let message = e.user_message("Failed to add ingredient");
                self.state.send_modify(|state| state.error = Some(message));
                false
            }
        }
    }

    /// Remove an ingredient from the inventory, then refresh
    ///
    /// Same contract as [`InventoryStore::add_ingredient`], with the generic
    /// fallback "Failed to remove ingredient".
    #[instrument(skip(self), fields(store = "inventory"))]
    pub async fn remove_ingredient(&self, ingredient_id: i64) -> bool {
        match self.api.remove_inventory_item(ingredient_id).await {
            Ok(response) => {
                debug!("removed ingredient {ingredient_id}: {}", response.message);
                self.fetch().await;
                true
            }
            Err(e) => {
                error!("failed to remove ingredient {ingredient_id}: {e}");
                let message = e.user_message("Failed to remove ingredient");
                self.state.send_modify(|state| state.error = Some(message));
                false
            }
        }
    }
}
