// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for zonelock.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "gm.ini";

/// INI section holding the grid connection settings
pub const CONFIG_SECTION: &str = "NIOS";

/// Config key for the grid master host or IP
pub const KEY_GRID_MASTER: &str = "gm";

/// Config key for the WAPI version (e.g. `v2.12`)
pub const KEY_API_VERSION: &str = "api_version";

/// Config key for the TLS certificate validation flag
pub const KEY_VALID_CERT: &str = "valid_cert";

/// Config key for the API username
pub const KEY_USER: &str = "user";

/// Config key for the API password
pub const KEY_PASSWORD: &str = "pass";

/// Config key for the request timeout in seconds
pub const KEY_TIMEOUT: &str = "timeout";

/// Config key selecting how lock changes are sent to the grid
pub const KEY_LOCK_METHOD: &str = "lock_method";

/// Default HTTP request timeout (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// WAPI Constants
// ============================================================================

/// Path segment that prefixes every WAPI resource
pub const WAPI_PATH: &str = "wapi";

/// WAPI object type for authoritative zones
pub const ZONE_AUTH_OBJECT: &str = "zone_auth";

/// Fields requested when listing zones
pub const ZONE_RETURN_FIELDS: &str = "fqdn,locked,locked_by";

/// Query parameter selecting returned fields
pub const PARAM_RETURN_FIELDS: &str = "_return_fields";

/// Query parameter for exact zone name match
pub const PARAM_FQDN: &str = "fqdn";

/// Query parameter naming an object function
pub const PARAM_FUNCTION: &str = "_function";

/// Object function that locks or unlocks a zone
pub const LOCK_UNLOCK_FUNCTION: &str = "lock_unlock_zone";

/// Query parameter carrying the lock function operation
pub const PARAM_OPERATION: &str = "operation";

/// `operation` value that locks a zone
pub const OPERATION_LOCK: &str = "LOCK";

/// `operation` value that unlocks a zone
pub const OPERATION_UNLOCK: &str = "UNLOCK";

// ============================================================================
// Process Exit Codes
// ============================================================================

/// Run completed (individual zone failures are reported, not fatal)
pub const EXIT_SUCCESS: u8 = 0;

/// Fatal error: configuration, authentication, zone lookup
pub const EXIT_FAILURE: u8 = 1;

/// Invalid command-line usage
pub const EXIT_USAGE: u8 = 2;
