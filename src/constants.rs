// ABOUTME: Wire-level defaults for the Dinner Tonight API client and stores
// ABOUTME: Page sizes, the max-missing default, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

/// Default base URL of the Dinner Tonight API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default upper bound on missing ingredients for recipe suggestions
pub const DEFAULT_MAX_MISSING: u32 = 2;

/// Page size the suggestion store always requests
pub const SUGGESTION_PAGE_SIZE: u32 = 20;

/// Default limit for direct suggestion queries
pub const DEFAULT_SUGGESTION_LIMIT: u32 = 10;

/// Default page size for recipe listings
pub const DEFAULT_RECIPE_PAGE_SIZE: u32 = 20;

/// Default result limit for ingredient search
pub const DEFAULT_INGREDIENT_SEARCH_LIMIT: u32 = 10;

/// Default page size for ingredient listings
pub const DEFAULT_INGREDIENT_PAGE_SIZE: u32 = 100;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("DinnerTonightClient/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "DINNER_TONIGHT_API_URL";

/// Environment variable setting the request timeout in seconds
pub const ENV_HTTP_TIMEOUT_SECS: &str = "DINNER_TONIGHT_HTTP_TIMEOUT_SECS";

/// Environment variable setting the connect timeout in seconds
pub const ENV_HTTP_CONNECT_TIMEOUT_SECS: &str = "DINNER_TONIGHT_HTTP_CONNECT_TIMEOUT_SECS";
