// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Grid management via the WAPI REST API.
//!
//! This module provides the authenticated HTTP session used to talk to a grid
//! master. It handles:
//!
//! - Building the `https://<gm>/wapi/<version>/` base URL
//! - HTTP Basic authentication on every request
//! - Optional TLS certificate validation
//! - Listing authoritative zones and changing their lock flag
//!
//! # Architecture
//!
//! The controller never talks to `reqwest` directly. It depends on the
//! [`ZoneApi`] trait, which [`WapiSession`] implements, so reconciliation logic
//! can be exercised against an in-memory grid.
//!
//! # Example
//!
//! ```rust,no_run
//! use zonelock::config::GridConfig;
//! use zonelock::wapi::{WapiSession, ZoneApi};
//!
//! # async fn example() -> Result<(), zonelock::errors::ZoneLockError> {
//! let config = GridConfig::from_file("gm.ini")?;
//! let session = WapiSession::new(&config)?;
//!
//! for zone in session.list_zones(Some("demozone.co.uk")).await? {
//!     println!("{} locked={}", zone.fqdn, zone.locked);
//! }
//! # Ok(())
//! # }
//! ```

pub mod zone_ops;

use crate::config::{GridConfig, LockMethod};
use crate::errors::ZoneLockError;
use crate::zone::{LockState, Zone};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use std::fmt;
use tracing::{debug, warn};
use url::Url;

/// Zone operations the lock controller needs from a grid.
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// List authoritative zones, optionally filtered to one exact name.
    ///
    /// An empty result is not an error here; callers decide what an empty
    /// filtered result means.
    async fn list_zones(&self, filter: Option<&str>) -> Result<Vec<Zone>, ZoneLockError>;

    /// Set the lock flag of one zone to `state`.
    async fn set_lock(&self, zone: &Zone, state: LockState) -> Result<(), ZoneLockError>;
}

/// Basic auth credentials for the grid.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub(crate) user: String,
    pub(crate) password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated WAPI session for one grid master.
///
/// The session is reused serially for every request in a run.
#[derive(Debug, Clone)]
pub struct WapiSession {
    /// HTTP client for API requests
    client: HttpClient,
    /// `https://<gm>/wapi/<version>/`
    base_url: Url,
    credentials: Credentials,
    lock_method: LockMethod,
}

impl WapiSession {
    /// Create a session from a grid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneLockError::Config`] if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &GridConfig) -> Result<Self, ZoneLockError> {
        let base_url = zone_ops::build_base_url(&config.gm, &config.api_version)?;

        if !config.valid_cert {
            warn!(gm = %config.gm, "TLS certificate validation is disabled");
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = HttpClient::builder()
            .danger_accept_invalid_certs(!config.valid_cert)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ZoneLockError::config(format!("failed to build HTTP client: {e}")))?;

        debug!(
            base_url = %base_url,
            user = %config.user,
            timeout = ?config.timeout,
            lock_method = ?config.lock_method,
            "WAPI session created"
        );

        Ok(Self {
            client,
            base_url,
            credentials: Credentials {
                user: config.user.clone(),
                password: config.password.clone(),
            },
            lock_method: config.lock_method,
        })
    }

    /// The WAPI base URL this session addresses.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl ZoneApi for WapiSession {
    async fn list_zones(&self, filter: Option<&str>) -> Result<Vec<Zone>, ZoneLockError> {
        zone_ops::list_zones(&self.client, &self.credentials, &self.base_url, filter).await
    }

    async fn set_lock(&self, zone: &Zone, state: LockState) -> Result<(), ZoneLockError> {
        zone_ops::set_lock(
            &self.client,
            &self.credentials,
            &self.base_url,
            self.lock_method,
            zone,
            state,
        )
        .await
    }
}
