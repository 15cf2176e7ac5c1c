// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # zonelock - Grid DNS zone lock management
//!
//! zonelock queries and changes the administrative lock flag of authoritative
//! DNS zones hosted on a grid, through the grid's WAPI REST API.
//!
//! ## Overview
//!
//! A run has four steps:
//!
//! 1. Load the connection settings ([`config::GridConfig`])
//! 2. Open an authenticated session ([`wapi::WapiSession`])
//! 3. Resolve the zones to act on ([`controller::resolve_zones`])
//! 4. Report, lock, or unlock each zone ([`controller::apply_action`])
//!
//! Lock and unlock only issue a write when a zone is not already in the
//! requested state, so both are safe to re-run.
//!
//! ## Modules
//!
//! - [`config`] - INI configuration loading
//! - [`controller`] - Zone resolution and lock reconciliation
//! - [`errors`] - Error kinds
//! - [`http_errors`] - HTTP status mapping
//! - [`report`] - Output rendering
//! - [`wapi`] - Authenticated WAPI session
//! - [`zone`] - Zone records, actions and results
//!
//! ## Example
//!
//! ```rust,no_run
//! use zonelock::config::GridConfig;
//! use zonelock::controller::{apply_action, resolve_zones};
//! use zonelock::wapi::WapiSession;
//! use zonelock::zone::LockAction;
//!
//! # async fn example() -> Result<(), zonelock::errors::ZoneLockError> {
//! let config = GridConfig::from_file("gm.ini")?;
//! let session = WapiSession::new(&config)?;
//!
//! let zones = resolve_zones(&session, Some("demozone.co.uk")).await?;
//! for result in apply_action(&session, &zones, LockAction::Lock).await {
//!     println!("{}", zonelock::report::format_result(&result));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod http_errors;
pub mod report;
pub mod wapi;
pub mod zone;

#[cfg(test)]
mod errors_tests;
