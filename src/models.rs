// ABOUTME: Wire data models for the Dinner Tonight API
// ABOUTME: Ingredients, inventory items, recipes, ranked matches, and mutation envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Wire Data Models
//!
//! Typed counterparts of the service's JSON payloads. Shapes follow the
//! service schema exactly; derived quantities (`missing_count`,
//! `match_percent`) are server-guaranteed and never recomputed client-side.

use serde::{Deserialize, Serialize};

/// An ingredient known to the service catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog ID
    pub id: i64,
    /// Ingredient name
    pub name: String,
    /// Grouping category (e.g. "produce", "dairy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// An ingredient currently held in the kitchen inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Inventory row ID
    pub id: i64,
    /// Denormalized ingredient name
    pub ingredient: String,
    /// Catalog ID of the ingredient
    pub ingredient_id: i64,
    /// Amount on hand; absent when never specified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit for `quantity` (e.g. "g", "cups")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A full recipe record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe ID
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preparation instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Cooking time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<i64>,
    /// Number of servings the recipe yields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<i64>,
}

/// A recipe ranked against the current inventory
///
/// Returned by the suggestions endpoint in server ranking order, which the
/// client preserves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeMatch {
    /// Recipe ID
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cooking time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<i64>,
    /// Total ingredients the recipe calls for
    pub total_ingredients: u32,
    /// How many of those the inventory covers
    pub matched_ingredients: u32,
    /// `total_ingredients - matched_ingredients`, computed server-side
    pub missing_count: u32,
    /// Match ratio as a percentage, computed server-side
    pub match_percent: f64,
    /// Names of the ingredients the inventory is missing
    pub missing_ingredients: Vec<String>,
}

/// Envelope returned by inventory mutations
///
/// POST responses carry the added `ingredient` name and row `id`; DELETE and
/// PUT responses carry only `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Human-readable outcome message
    pub message: String,
    /// Name of the affected ingredient (POST only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    /// Inventory row ID (POST only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Structured error body: `{"detail": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable failure reason
    pub detail: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn inventory_item_decodes_null_quantity_and_unit() {
        let item: InventoryItem = serde_json::from_value(json!({
            "id": 3,
            "ingredient": "Garlic",
            "ingredient_id": 12,
            "quantity": null,
            "unit": null
        }))
        .unwrap();

        assert_eq!(item.id, 3);
        assert_eq!(item.ingredient, "Garlic");
        assert_eq!(item.ingredient_id, 12);
        assert!(item.quantity.is_none());
        assert!(item.unit.is_none());
    }

    #[test]
    fn inventory_item_skips_absent_optionals_when_serialized() {
        let item = InventoryItem {
            id: 1,
            ingredient: "Salt".to_owned(),
            ingredient_id: 9,
            quantity: None,
            unit: None,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("quantity").is_none());
        assert!(value.get("unit").is_none());
    }

    #[test]
    fn recipe_match_decodes_ranked_payload() {
        let m: RecipeMatch = serde_json::from_value(json!({
            "id": 7,
            "name": "Tomato Soup",
            "description": "Quick weeknight soup",
            "cooking_time": 25,
            "total_ingredients": 6,
            "matched_ingredients": 5,
            "missing_count": 1,
            "match_percent": 83.3,
            "missing_ingredients": ["basil"]
        }))
        .unwrap();

        assert_eq!(m.name, "Tomato Soup");
        assert_eq!(m.missing_count, 1);
        assert_eq!(m.total_ingredients - m.matched_ingredients, m.missing_count);
        assert_eq!(m.missing_ingredients, vec!["basil".to_owned()]);
    }

    #[test]
    fn mutation_response_decodes_both_shapes() {
        let added: MutationResponse = serde_json::from_value(json!({
            "message": "Added to inventory",
            "ingredient": "Garlic",
            "id": 15
        }))
        .unwrap();
        assert_eq!(added.ingredient.as_deref(), Some("Garlic"));
        assert_eq!(added.id, Some(15));

        let removed: MutationResponse = serde_json::from_value(json!({
            "message": "Removed from inventory"
        }))
        .unwrap();
        assert_eq!(removed.message, "Removed from inventory");
        assert!(removed.ingredient.is_none());
        assert!(removed.id.is_none());
    }

    #[test]
    fn error_detail_decodes() {
        let err: ErrorDetail =
            serde_json::from_value(json!({"detail": "Ingredient already in inventory"})).unwrap();
        assert_eq!(err.detail, "Ingredient already in inventory");
    }
}
