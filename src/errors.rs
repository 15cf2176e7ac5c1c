// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for zone lock operations.
//!
//! Every failure the tool can hit is one variant of [`ZoneLockError`]:
//! - Configuration problems (missing file, section, or key)
//! - WAPI authentication failures (HTTP 401/403)
//! - A requested zone that does not exist on the grid
//! - Transport failures (connection refused, timeout, TLS)
//! - Non-2xx WAPI responses describing a server-side failure
//! - Malformed response bodies
//!
//! Whether an error aborts the run depends on where it happens, not only on its
//! kind: zone resolution errors are always fatal, while mutation errors are
//! attached to the affected zone's result and the run continues.

use thiserror::Error;

/// Errors returned by configuration loading, the WAPI session, and the controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneLockError {
    /// Missing or malformed configuration file or key
    #[error("Configuration error: {reason}")]
    Config {
        /// What is wrong with the configuration
        reason: String,
    },

    /// The grid rejected the credentials (HTTP 401) or the user lacks permission (HTTP 403)
    #[error("Authentication failed for {url} (HTTP {status})")]
    Auth {
        /// HTTP status code (401 or 403)
        status: u16,
        /// The URL that rejected the request
        url: String,
    },

    /// A specifically requested zone does not exist on the grid
    #[error("Zone '{zone}' not found")]
    NotFound {
        /// The zone name that was requested
        zone: String,
    },

    /// Connection refused, timeout, or TLS failure before any HTTP status was received
    #[error("Network error calling {url}: {reason}")]
    Network {
        /// The URL being called
        url: String,
        /// Underlying transport error
        reason: String,
    },

    /// Non-2xx WAPI response other than an authentication failure
    #[error("WAPI error from {url} (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The URL that returned the error
        url: String,
        /// Error text reported by the grid
        message: String,
    },

    /// Response body missing a required field or not valid JSON
    #[error("Failed to parse WAPI response: {reason}")]
    Parse {
        /// What could not be parsed
        reason: String,
    },

    /// Invalid combination of command-line options
    #[error("Usage error: {reason}")]
    Usage {
        /// Explanation of the invalid usage
        reason: String,
    },
}

impl ZoneLockError {
    /// Shorthand for a [`ZoneLockError::Config`] error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`ZoneLockError::Parse`] error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Short, stable name of the error kind, used in the failure summary.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "ConfigError",
            Self::Auth { .. } => "AuthError",
            Self::NotFound { .. } => "NotFoundError",
            Self::Network { .. } => "NetworkError",
            Self::Api { .. } => "APIError",
            Self::Parse { .. } => "ParseError",
            Self::Usage { .. } => "UsageError",
        }
    }
}

/// Convert a transport-level `reqwest` failure into a [`ZoneLockError`].
///
/// Decode failures become [`ZoneLockError::Parse`]; everything else (connect,
/// timeout, TLS, redirect loops) is a [`ZoneLockError::Network`] error.
pub(crate) fn from_reqwest(url: &str, err: &reqwest::Error) -> ZoneLockError {
    if err.is_decode() {
        return ZoneLockError::parse(format!("{url}: {err}"));
    }

    let reason = if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    };

    ZoneLockError::Network {
        url: url.to_string(),
        reason,
    }
}
