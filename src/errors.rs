// ABOUTME: Error types for the Dinner Tonight API binding layer
// ABOUTME: Distinguishes transport failures, API rejections, and decode errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Client Error Types
//!
//! Two kinds of failure reach consumers: transport errors (the request never
//! produced a response) and API rejections (the server answered with a
//! non-success status, optionally carrying a structured `detail` message).
//! The stores flatten both into a single `error` string;
//! [`ApiError::user_message`] is where that flattening happens for mutation
//! paths, mirroring the service's `{"detail": "..."}` error contract.

use std::error::Error;
use std::fmt;

/// Result alias used throughout the binding layer
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by the API client
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response
    Network {
        /// Transport-level failure message
        message: String,
    },
    /// The server answered with a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Structured `detail` message decoded from the error body, when present
        detail: Option<String>,
    },
    /// A success response carried a body that failed to decode
    Parse {
        /// What was being decoded (e.g. "inventory items")
        what: &'static str,
        /// Underlying decode error
        source: serde_json::Error,
    },
    /// Configuration was rejected before any request was made
    Config {
        /// Why the configuration is unusable
        reason: String,
    },
}

impl ApiError {
    /// Create a network error
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an API rejection error
    #[must_use]
    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api { status, detail }
    }

    /// Create a decode error
    #[must_use]
    pub fn parse(what: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { what, source }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Structured `detail` message from the server, when the failure carried one
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status code, for API rejections
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for surfacing to a person: the server's `detail` when
    /// present, the supplied fallback otherwise.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { message } => {
                write!(f, "network error: {message}")
            }
            Self::Api {
                status,
                detail: Some(detail),
            } => {
                write!(f, "API error: HTTP {status}: {detail}")
            }
            Self::Api {
                status,
                detail: None,
            } => {
                write!(f, "API error: HTTP {status}")
            }
            Self::Parse { what, source } => {
                write!(f, "failed to decode {what}: {source}")
            }
            Self::Config { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
