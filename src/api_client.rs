// ABOUTME: HTTP binding from domain operations to the Dinner Tonight REST API
// ABOUTME: One method per remote operation; typed results, no retries, no caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # API Client
//!
//! Stateless translation of domain operations into HTTP requests against the
//! Dinner Tonight service. Each method issues exactly one request and returns
//! its typed result; interpreting failures into user-facing strings belongs
//! to the stores.
//!
//! Paths mirror the service routes exactly, including the trailing-slash
//! asymmetry between collection listings (`/recipes/`, `/ingredients/`) and
//! the inventory root (`/inventory`).
//!
//! # Example
//! ```rust,no_run
//! use dinner_tonight_client::api_client::ApiClient;
//! use dinner_tonight_client::config::ApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(&ApiConfig::default());
//! let suggestions = client.get_suggestions(2, 10).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::constants::USER_AGENT;
use crate::errors::{ApiError, ApiResult};
use crate::models::{ErrorDetail, Ingredient, InventoryItem, MutationResponse, Recipe, RecipeMatch};

/// Client for the Dinner Tonight REST API
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new client from configuration
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let mut builder = Client::builder().user_agent(USER_AGENT);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Self {
            base_url: config.normalized_base_url().to_owned(),
            client: builder.build().unwrap_or_default(),
        }
    }

    /// Fetch ranked recipe suggestions for the current inventory
    ///
    /// # Arguments
    /// * `max_missing` - Upper bound on missing ingredients per suggestion
    /// * `limit` - Maximum number of suggestions to return
    ///
    /// # Returns
    /// Matches in server ranking order, never re-sorted client-side.
    ///
    /// # Errors
    /// Returns an error if the request fails or the response does not decode
    pub async fn get_suggestions(
        &self,
        max_missing: u32,
        limit: u32,
    ) -> ApiResult<Vec<RecipeMatch>> {
        let url = format!("{}/recipes/suggestions", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("max-missing", max_missing.to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "recipe suggestions").await
    }

    /// List recipes with skip/limit pagination
    ///
    /// # Errors
    /// Returns an error if the request fails or the response does not decode
    pub async fn list_recipes(&self, skip: u32, limit: u32) -> ApiResult<Vec<Recipe>> {
        let url = format!("{}/recipes/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("skip", skip.to_string()), ("limit", limit.to_string())])
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "recipes").await
    }

    /// Fetch a single recipe by ID
    ///
    /// # Errors
    /// Returns `ApiError::Api` with status 404 when the recipe does not exist
    pub async fn get_recipe(&self, id: i64) -> ApiResult<Recipe> {
        let url = format!("{}/recipes/{id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "recipe").await
    }

    /// Fetch the full inventory snapshot
    pub async fn get_inventory(&self) -> ApiResult<Vec<InventoryItem>> {
        let url = format!("{}/inventory", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "inventory items").await
    }

    /// Add an ingredient to the inventory
    ///
    /// Parameters ride in the query string; the request carries no body.
    /// Omitted optionals stay absent from the request, never zero or "".
    ///
    /// # Errors
    /// Returns `ApiError::Api` carrying the service's `detail` message when
    /// the ingredient is unknown or already in the inventory.
    pub async fn add_inventory_item(
        &self,
        ingredient_id: i64,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> ApiResult<MutationResponse> {
        let url = format!("{}/inventory", self.base_url);

        let mut params = vec![("ingredient_id", ingredient_id.to_string())];
        if let Some(quantity) = quantity {
            params.push(("quantity", quantity.to_string()));
        }
        if let Some(unit) = unit {
            params.push(("unit", unit.to_owned()));
        }

        let response = self
            .client
            .post(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "mutation response").await
    }

    /// Remove an ingredient from the inventory
    ///
    /// # Errors
    /// Returns `ApiError::Api` carrying the service's `detail` message when
    /// the ingredient is not in the inventory.
    pub async fn remove_inventory_item(&self, ingredient_id: i64) -> ApiResult<MutationResponse> {
        let url = format!("{}/inventory/{ingredient_id}", self.base_url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "mutation response").await
    }

    /// Update quantity and unit of an inventory item
    ///
    /// Both fields are mandatory on this path; partial updates go through
    /// remove-and-add.
    pub async fn update_inventory_item(
        &self,
        ingredient_id: i64,
        quantity: f64,
        unit: &str,
    ) -> ApiResult<MutationResponse> {
        let url = format!("{}/inventory/{ingredient_id}", self.base_url);
        let response = self
            .client
            .put(&url)
            .query(&[("quantity", quantity.to_string()), ("unit", unit.to_owned())])
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "mutation response").await
    }

    /// Search the ingredient catalog by name fragment
    ///
    /// The query is URL-escaped by the transport.
    pub async fn search_ingredients(&self, query: &str, limit: u32) -> ApiResult<Vec<Ingredient>> {
        let url = format!("{}/ingredients/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("limit", &limit.to_string())])
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "ingredients").await
    }

    /// List the ingredient catalog with skip/limit pagination
    pub async fn list_ingredients(&self, skip: u32, limit: u32) -> ApiResult<Vec<Ingredient>> {
        let url = format!("{}/ingredients/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("skip", skip.to_string()), ("limit", limit.to_string())])
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        decode(response, "ingredients").await
    }
}

/// Drain the response body, mapping non-success statuses to `ApiError::Api`
/// with the structured `detail` when the body carries one.
async fn decode<T: DeserializeOwned>(response: reqwest::Response, what: &'static str) -> ApiResult<T> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorDetail>(&text)
            .map(|body| body.detail)
            .ok();
        debug!("API rejected {what}: HTTP {status}");
        return Err(ApiError::api(status.as_u16(), detail));
    }

    serde_json::from_str(&text).map_err(|e| ApiError::parse(what, e))
}
