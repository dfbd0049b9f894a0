// ABOUTME: Recipe suggestion store holding ranked matches against the inventory
// ABOUTME: Read-only fetch with a tunable max-missing filter between fetches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Recipe Suggestion Store
//!
//! Holds the ranked list of [`RecipeMatch`]es for the current inventory. The
//! `max_missing` filter travels with the state and applies to the next
//! [`RecipeSuggestionStore::fetch_suggestions`] call; the page size is fixed
//! at [`SUGGESTION_PAGE_SIZE`].
//!
//! This store has no mutations. After inventory changes, consumers call
//! `fetch_suggestions` again; nothing invalidates across stores.

use tokio::sync::watch;
use tracing::{error, instrument};

use crate::api_client::ApiClient;
use crate::constants::{DEFAULT_MAX_MISSING, SUGGESTION_PAGE_SIZE};
use crate::models::RecipeMatch;

/// Snapshot of suggestion state published to observers
#[derive(Debug, Clone)]
pub struct RecipeSuggestionState {
    /// Ranked matches in server order, replaced wholesale on every fetch
    pub suggestions: Vec<RecipeMatch>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Message of the most recent failure, cleared when a fetch starts
    pub error: Option<String>,
    /// Upper bound on missing ingredients for the next fetch
    pub max_missing: u32,
}

impl Default for RecipeSuggestionState {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            loading: false,
            error: None,
            max_missing: DEFAULT_MAX_MISSING,
        }
    }
}

/// Store owning the client-side suggestion list
///
/// Cloning produces another handle onto the same state channel.
#[derive(Clone)]
pub struct RecipeSuggestionStore {
    api: ApiClient,
    state: watch::Sender<RecipeSuggestionState>,
}

impl RecipeSuggestionStore {
    /// Create a store backed by the given client
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(RecipeSuggestionState::default());
        Self { api, state }
    }

    /// Current snapshot
    #[must_use]
    pub fn state(&self) -> RecipeSuggestionState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RecipeSuggestionState> {
        self.state.subscribe()
    }

    /// Set the missing-ingredient bound used by the next fetch
    pub fn set_max_missing(&self, max_missing: u32) {
        self.state
            .send_modify(|state| state.max_missing = max_missing);
    }

    /// Fetch ranked suggestions for the current inventory
    ///
    /// Requests with the current `max_missing` and the fixed page size of 20.
    /// Server ranking order is preserved. `loading` clears on settlement
    /// whether the fetch succeeded or not.
    #[instrument(skip(self), fields(store = "recipes"))]
    pub async fn fetch_suggestions(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let max_missing = self.state.borrow().max_missing;
        let result = self
            .api
            .get_suggestions(max_missing, SUGGESTION_PAGE_SIZE)
            .await;

        if let Err(e) = &result {
            error!("failed to fetch recipe suggestions: {e}");
        }

        self.state.send_modify(|state| {
            state.loading = false;
            match result {
                Ok(suggestions) => state.suggestions = suggestions,
                Err(e) => state.error = Some(e.to_string()),
            }
        });
    }
}
