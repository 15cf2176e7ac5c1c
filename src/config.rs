// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Grid connection configuration.
//!
//! The configuration lives in the `[NIOS]` section of an INI file (`gm.ini` by
//! default):
//!
//! ```ini
//! [NIOS]
//! gm = '192.168.1.10'
//! api_version = 'v2.12'
//! valid_cert = 'false'
//! user = 'admin'
//! pass = 'infoblox'
//! ```
//!
//! Values may be wrapped in single or double quotes. Keys are case-insensitive,
//! and lines starting with `#` or `;` are comments. The loaded [`GridConfig`]
//! is immutable and is passed by reference to the session.

use crate::constants::{
    CONFIG_SECTION, DEFAULT_REQUEST_TIMEOUT_SECS, KEY_API_VERSION, KEY_GRID_MASTER,
    KEY_LOCK_METHOD, KEY_PASSWORD, KEY_TIMEOUT, KEY_USER, KEY_VALID_CERT,
};
use crate::errors::ZoneLockError;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// How lock state changes are sent to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockMethod {
    /// `PUT <ref>` with a `{"locked": bool}` body
    #[default]
    Update,
    /// `POST <ref>?_function=lock_unlock_zone&operation=LOCK|UNLOCK`
    Function,
}

impl FromStr for LockMethod {
    type Err = ZoneLockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "update" | "put" => Ok(Self::Update),
            "function" | "lock_unlock_zone" => Ok(Self::Function),
            other => Err(ZoneLockError::config(format!(
                "invalid {KEY_LOCK_METHOD} '{other}' (expected 'update' or 'function')"
            ))),
        }
    }
}

/// Connection descriptor for a grid master.
#[derive(Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Grid master host or IP, optionally with an `http://` or `https://` scheme
    pub gm: String,
    /// WAPI version, e.g. `v2.12`
    pub api_version: String,
    /// Validate the grid's TLS certificate
    pub valid_cert: bool,
    /// API username
    pub user: String,
    /// API password (never logged)
    pub password: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// How lock changes are sent
    pub lock_method: LockMethod,
}

impl fmt::Debug for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridConfig")
            .field("gm", &self.gm)
            .field("api_version", &self.api_version)
            .field("valid_cert", &self.valid_cert)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("lock_method", &self.lock_method)
            .finish()
    }
}

impl GridConfig {
    /// Load the configuration from an INI file.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneLockError::Config`] if the file cannot be read, the `[NIOS]`
    /// section is missing, or a required key is missing or invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ZoneLockError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ZoneLockError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "Read configuration file");
        Self::parse_ini(&contents).map_err(|e| match e {
            ZoneLockError::Config { reason } => {
                ZoneLockError::config(format!("{}: {reason}", path.display()))
            }
            other => other,
        })
    }

    /// Parse the configuration from INI text.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneLockError::Config`] on malformed input or missing keys.
    pub fn parse_ini(contents: &str) -> Result<Self, ZoneLockError> {
        let sections = parse_sections(contents)?;
        let section = sections.get(CONFIG_SECTION).ok_or_else(|| {
            ZoneLockError::config(format!("no [{CONFIG_SECTION}] section found"))
        })?;

        let required = |key: &str| -> Result<String, ZoneLockError> {
            match section.get(key) {
                Some(value) if !value.is_empty() => {
                    debug!(key = %key, "Configuration key found");
                    Ok(value.clone())
                }
                Some(_) => Err(ZoneLockError::config(format!(
                    "key '{key}' in [{CONFIG_SECTION}] is empty"
                ))),
                None => Err(ZoneLockError::config(format!(
                    "key '{key}' not found in [{CONFIG_SECTION}] section"
                ))),
            }
        };

        let valid_cert = match section.get(KEY_VALID_CERT) {
            Some(value) if !value.is_empty() => parse_bool(value).ok_or_else(|| {
                ZoneLockError::config(format!(
                    "invalid boolean '{value}' for key '{KEY_VALID_CERT}'"
                ))
            })?,
            _ => false,
        };

        let timeout = match section.get(KEY_TIMEOUT) {
            Some(value) if !value.is_empty() => {
                let secs: u64 = value.parse().map_err(|_| {
                    ZoneLockError::config(format!(
                        "invalid number of seconds '{value}' for key '{KEY_TIMEOUT}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(ZoneLockError::config(format!(
                        "key '{KEY_TIMEOUT}' must be greater than zero"
                    )));
                }
                Duration::from_secs(secs)
            }
            _ => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let lock_method = match section.get(KEY_LOCK_METHOD) {
            Some(value) if !value.is_empty() => value.parse::<LockMethod>()?,
            _ => LockMethod::default(),
        };

        Ok(Self {
            gm: required(KEY_GRID_MASTER)?,
            api_version: required(KEY_API_VERSION)?,
            valid_cert,
            user: required(KEY_USER)?,
            password: required(KEY_PASSWORD)?,
            timeout,
            lock_method,
        })
    }
}

/// Split INI text into sections of lowercase keys to unquoted values.
fn parse_sections(
    contents: &str,
) -> Result<HashMap<String, HashMap<String, String>>, ZoneLockError> {
    let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
    let mut current: Option<String> = None;

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest.strip_suffix(']').ok_or_else(|| {
                ZoneLockError::config(format!("line {}: unterminated section header", index + 1))
            })?;
            let name = name.trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some(section) = current.as_ref() else {
            return Err(ZoneLockError::config(format!(
                "line {}: key outside of any section",
                index + 1
            )));
        };

        let (key, value) = line.split_once(['=', ':']).ok_or_else(|| {
            ZoneLockError::config(format!("line {}: expected key = value", index + 1))
        })?;

        sections
            .entry(section.clone())
            .or_default()
            .insert(key.trim().to_ascii_lowercase(), unquote(value.trim()).to_string());
    }

    Ok(sections)
}

/// Strip any surrounding single or double quote characters.
fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '\'' || c == '"')
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
