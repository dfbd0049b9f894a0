// ABOUTME: Client configuration for the Dinner Tonight API
// ABOUTME: Base URL and optional HTTP timeouts, loadable from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Client Configuration
//!
//! Configuration is plain data: construct [`ApiConfig`] directly (tests point
//! it at a mock server), or call [`ApiConfig::from_env`] to pick up the
//! deployment's environment variables with in-code defaults.

use std::time::Duration;

use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, ENV_API_URL, ENV_HTTP_CONNECT_TIMEOUT_SECS, ENV_HTTP_TIMEOUT_SECS,
};
use crate::errors::{ApiError, ApiResult};

/// Dinner Tonight API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, including the `/api` prefix
    pub base_url: String,
    /// Total request timeout; `None` defers to the transport default
    pub timeout: Option<Duration>,
    /// Connect timeout; `None` defers to the transport default
    pub connect_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// Reads `DINNER_TONIGHT_API_URL`, `DINNER_TONIGHT_HTTP_TIMEOUT_SECS`, and
    /// `DINNER_TONIGHT_HTTP_CONNECT_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if a timeout variable is not a whole number
    /// of seconds or the base URL does not parse.
    pub fn from_env() -> ApiResult<Self> {
        let config = Self {
            base_url: std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout: duration_from_env(ENV_HTTP_TIMEOUT_SECS)?,
            connect_timeout: duration_from_env(ENV_HTTP_CONNECT_TIMEOUT_SECS)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configured base URL
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL does not parse or uses a
    /// scheme other than http/https.
    pub fn validate(&self) -> ApiResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ApiError::config(format!("base URL '{}' is not valid: {e}", self.base_url))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::config(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Base URL with trailing slashes removed, ready for path concatenation
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn duration_from_env(var: &str) -> ApiResult<Option<Duration>> {
    match std::env::var(var) {
        Ok(raw) => {
            let secs: u64 = raw.parse().map_err(|_| {
                ApiError::config(format!("{var} must be a whole number of seconds"))
            })?;
            Ok(Some(Duration::from_secs(secs)))
        }
        Err(_) => Ok(None),
    }
}
