// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP status code mapping to zone lock error kinds.
//!
//! This module turns non-2xx responses from the grid's WAPI into typed
//! [`ZoneLockError`] values, so that authentication failures can be told apart
//! from server-side validation failures without parsing error strings.
//!
//! # Usage
//!
//! ```rust
//! use zonelock::errors::ZoneLockError;
//! use zonelock::http_errors::map_http_status;
//!
//! let err = map_http_status(401, "https://gm/wapi/v2.12/zone_auth", "");
//! assert!(matches!(err, ZoneLockError::Auth { status: 401, .. }));
//!
//! let err = map_http_status(400, "https://gm/wapi/v2.12/zone_auth", "bad");
//! assert!(matches!(err, ZoneLockError::Api { status: 400, .. }));
//! ```

use crate::errors::ZoneLockError;
use serde_json::Value;

/// Map a non-2xx HTTP status and response body to a [`ZoneLockError`].
///
/// # HTTP Code Mapping
///
/// | HTTP Code | Error | Meaning |
/// |-----------|-------|---------|
/// | 401 | `Auth` | Credentials rejected |
/// | 403 | `Auth` | User lacks permission |
/// | Other | `Api` | Server-side failure, message from the WAPI error body |
#[must_use]
pub fn map_http_status(status: u16, url: &str, body: &str) -> ZoneLockError {
    match status {
        401 | 403 => ZoneLockError::Auth {
            status,
            url: url.to_string(),
        },
        _ => {
            let text = extract_wapi_error_text(body);
            let message = if text.is_empty() {
                describe_status(status)
            } else {
                text
            };
            ZoneLockError::Api {
                status,
                url: url.to_string(),
                message,
            }
        }
    }
}

/// Extract the human-readable error text from a WAPI error body.
///
/// WAPI reports failures as `{"Error": "...", "code": "...", "text": "..."}`.
/// The `text` field is preferred, then `Error`. A body that is not such an
/// object is returned trimmed, as-is.
#[must_use]
pub fn extract_wapi_error_text(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for field in ["text", "Error"] {
            if let Some(Value::String(text)) = map.get(field) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    }
    body.trim().to_string()
}

/// Human-readable explanation of an HTTP status code from the grid.
#[must_use]
pub fn describe_status(status_code: u16) -> String {
    match status_code {
        400 => "Invalid request to WAPI (400)".into(),
        401 => "WAPI authentication required (401)".into(),
        403 => "WAPI authorization failed (403)".into(),
        404 => "WAPI object or resource not found (404)".into(),
        500 => "WAPI internal error (500)".into(),
        502 => "Bad gateway reaching grid master (502)".into(),
        503 => "Grid master service unavailable (503)".into(),
        504 => "Gateway timeout reaching grid master (504)".into(),
        _ => format!("Unexpected HTTP response from WAPI ({status_code})"),
    }
}
