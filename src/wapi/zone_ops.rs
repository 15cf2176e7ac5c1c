// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone HTTP API operations against the grid's WAPI.
//!
//! This module contains the request plumbing and the two zone calls the tool
//! needs: listing authoritative zones and changing a zone's lock flag.

use super::Credentials;
use crate::config::LockMethod;
use crate::constants::{
    LOCK_UNLOCK_FUNCTION, OPERATION_LOCK, OPERATION_UNLOCK, PARAM_FQDN, PARAM_FUNCTION,
    PARAM_OPERATION, PARAM_RETURN_FIELDS, WAPI_PATH, ZONE_AUTH_OBJECT, ZONE_RETURN_FIELDS,
};
use crate::errors::{from_reqwest, ZoneLockError};
use crate::http_errors::map_http_status;
use crate::zone::{LockState, Zone};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

/// Body of a `PUT` that changes a zone's lock flag.
#[derive(Debug, Serialize)]
struct LockUpdate {
    locked: bool,
}

/// Build the WAPI base URL from the grid master address and API version.
///
/// Converts `"192.168.1.10"` and `"v2.12"` to `<https://192.168.1.10/wapi/v2.12/>`.
/// A grid master address that already carries an `http://` or `https://`
/// scheme keeps it. The returned URL always ends with `/`.
///
/// # Errors
///
/// Returns [`ZoneLockError::Config`] if either part is empty or the result is
/// not a valid URL.
pub(crate) fn build_base_url(gm: &str, api_version: &str) -> Result<Url, ZoneLockError> {
    let gm = gm.trim().trim_end_matches('/');
    let version = api_version.trim().trim_matches('/');

    if gm.is_empty() || gm == "http:" || gm == "https:" {
        return Err(ZoneLockError::config("grid master address is empty"));
    }
    if version.is_empty() {
        return Err(ZoneLockError::config("API version is empty"));
    }

    let root = if gm.starts_with("http://") || gm.starts_with("https://") {
        gm.to_string()
    } else {
        format!("https://{gm}")
    };

    Url::parse(&format!("{root}/{WAPI_PATH}/{version}/"))
        .map_err(|e| ZoneLockError::config(format!("invalid grid URL '{root}': {e}")))
}

/// Address a WAPI object by its `_ref` relative to the base URL.
pub(crate) fn object_url(base: &Url, reference: &str) -> Result<Url, ZoneLockError> {
    let reference = reference.trim_start_matches('/');
    if reference.is_empty() {
        return Err(ZoneLockError::parse("empty object reference"));
    }
    Url::parse(&format!("{base}{reference}"))
        .map_err(|e| ZoneLockError::parse(format!("invalid object reference '{reference}': {e}")))
}

/// Build the `zone_auth` list URL, optionally filtered to one exact name.
pub(crate) fn zone_list_url(base: &Url, filter: Option<&str>) -> Result<Url, ZoneLockError> {
    let mut url = base
        .join(ZONE_AUTH_OBJECT)
        .map_err(|e| ZoneLockError::config(format!("invalid base URL {base}: {e}")))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair(PARAM_RETURN_FIELDS, ZONE_RETURN_FIELDS);
        if let Some(name) = filter {
            query.append_pair(PARAM_FQDN, name);
        }
    }
    Ok(url)
}

/// Execute one WAPI request and return the response body.
///
/// There is no retry: a transport failure or non-2xx status is returned
/// immediately as a typed error.
///
/// # Errors
///
/// - [`ZoneLockError::Network`] on connection, timeout or TLS failure
/// - [`ZoneLockError::Auth`] on HTTP 401/403
/// - [`ZoneLockError::Api`] on any other non-2xx status
async fn wapi_request<T: Serialize + std::fmt::Debug>(
    client: &HttpClient,
    credentials: &Credentials,
    method: Method,
    url: &Url,
    body: Option<&T>,
) -> Result<String, ZoneLockError> {
    debug!(
        method = %method,
        url = %url,
        body = ?body,
        user = %credentials.user,
        "WAPI request"
    );

    let mut request = client
        .request(method.clone(), url.clone())
        .basic_auth(&credentials.user, Some(&credentials.password));
    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    let response = request.send().await.map_err(|e| {
        error!(method = %method, url = %url, error = %e, "WAPI request failed to send");
        from_reqwest(url.as_str(), &e)
    })?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| from_reqwest(url.as_str(), &e))?;

    if !status.is_success() {
        debug!(
            method = %method,
            url = %url,
            status = %status,
            body = %text,
            "WAPI request returned an error"
        );
        return Err(map_http_status(status.as_u16(), url.as_str(), &text));
    }

    debug!(
        method = %method,
        url = %url,
        status = %status,
        response_len = text.len(),
        "WAPI request successful"
    );

    Ok(text)
}

/// List authoritative zones with their lock status.
///
/// # Errors
///
/// Returns any request error, or [`ZoneLockError::Parse`] if the body is not a
/// JSON array of zone objects.
pub(crate) async fn list_zones(
    client: &HttpClient,
    credentials: &Credentials,
    base: &Url,
    filter: Option<&str>,
) -> Result<Vec<Zone>, ZoneLockError> {
    let url = zone_list_url(base, filter)?;

    info!(filter = ?filter, "Retrieving zone data");
    let text = wapi_request(client, credentials, Method::GET, &url, None::<&()>).await?;

    let value: Value = serde_json::from_str(&text)
        .map_err(|e| ZoneLockError::parse(format!("zone list from {url}: {e}")))?;
    let zones = Zone::list_from_value(&value)?;

    info!(count = zones.len(), "Zone data retrieved successfully");
    Ok(zones)
}

/// Set a zone's lock flag, addressing the zone by its reference.
///
/// # Errors
///
/// Returns any request error, or [`ZoneLockError::Parse`] if the grid's
/// acknowledgement is not in the expected shape.
pub(crate) async fn set_lock(
    client: &HttpClient,
    credentials: &Credentials,
    base: &Url,
    method: LockMethod,
    zone: &Zone,
    state: LockState,
) -> Result<(), ZoneLockError> {
    let mut url = object_url(base, &zone.reference)?;

    let text = match method {
        LockMethod::Update => {
            let body = LockUpdate {
                locked: state.is_locked(),
            };
            wapi_request(client, credentials, Method::PUT, &url, Some(&body)).await?
        }
        LockMethod::Function => {
            let operation = if state.is_locked() {
                OPERATION_LOCK
            } else {
                OPERATION_UNLOCK
            };
            url.query_pairs_mut()
                .append_pair(PARAM_FUNCTION, LOCK_UNLOCK_FUNCTION)
                .append_pair(PARAM_OPERATION, operation);
            wapi_request(client, credentials, Method::POST, &url, None::<&()>).await?
        }
    };

    let ack: Value = serde_json::from_str(&text)
        .map_err(|e| ZoneLockError::parse(format!("lock response from {url}: {e}")))?;

    match (method, &ack) {
        (LockMethod::Update, Value::String(reference)) => {
            if reference != &zone.reference {
                warn!(
                    zone = %zone.fqdn,
                    expected = %zone.reference,
                    returned = %reference,
                    "Grid returned a different reference after update"
                );
            }
        }
        (LockMethod::Function, Value::Object(_)) => {}
        _ => {
            return Err(ZoneLockError::parse(format!(
                "unexpected lock response from {url}: {ack}"
            )));
        }
    }

    info!(zone = %zone.fqdn, state = %state, "Zone lock state changed");
    Ok(())
}

#[cfg(test)]
#[path = "zone_ops_tests.rs"]
mod zone_ops_tests;
