// ABOUTME: Reactive domain stores holding the client-side copy of remote state
// ABOUTME: Inventory and recipe suggestion stores publishing snapshots over watch channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Domain Stores
//!
//! Each store owns the authoritative in-memory copy of one remote collection
//! and exposes it as a snapshot (data, loading flag, error message) published
//! through a `tokio::sync::watch` channel. Consumers either read the current
//! snapshot with `state()` or subscribe for change notifications.
//!
//! Stores are cheaply cloneable handles; all clones share the same channel.
//! The two stores are independent: after an inventory change, consumers
//! re-fetch suggestions themselves.

pub mod inventory;
pub mod recipes;

// Re-export commonly used types
pub use inventory::{InventoryState, InventoryStore};
pub use recipes::{RecipeSuggestionState, RecipeSuggestionStore};
