// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed zone records, lock actions, and per-zone results.
//!
//! WAPI returns zones as loosely-typed JSON objects. [`Zone::from_value`]
//! validates and extracts only the fields this tool relies on, so the rest of
//! the crate never touches raw JSON.

use crate::errors::ZoneLockError;
use serde_json::Value;
use std::fmt;

/// Administrative lock state of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

impl LockState {
    #[must_use]
    pub fn is_locked(self) -> bool {
        self == Self::Locked
    }
}

impl From<bool> for LockState {
    fn from(locked: bool) -> Self {
        if locked {
            Self::Locked
        } else {
            Self::Unlocked
        }
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => write!(f, "LOCKED"),
            Self::Unlocked => write!(f, "UNLOCKED"),
        }
    }
}

/// What to do with each resolved zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockAction {
    /// Report the current lock state without changing anything
    #[default]
    Report,
    /// Lock every zone that is not already locked
    Lock,
    /// Unlock every zone that is currently locked
    Unlock,
}

impl LockAction {
    /// Build the action from the `--lock` / `--unlock` flags.
    ///
    /// Neither flag selects [`LockAction::Report`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoneLockError::Usage`] when both flags are set.
    pub fn from_flags(lock: bool, unlock: bool) -> Result<Self, ZoneLockError> {
        match (lock, unlock) {
            (false, false) => Ok(Self::Report),
            (true, false) => Ok(Self::Lock),
            (false, true) => Ok(Self::Unlock),
            (true, true) => Err(ZoneLockError::Usage {
                reason: "--lock and --unlock cannot be used together".to_string(),
            }),
        }
    }

    /// The state a zone must end up in, or `None` for [`LockAction::Report`].
    #[must_use]
    pub fn target_state(self) -> Option<LockState> {
        match self {
            Self::Report => None,
            Self::Lock => Some(LockState::Locked),
            Self::Unlock => Some(LockState::Unlocked),
        }
    }
}

/// One authoritative zone as returned by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Fully-qualified zone name
    pub fqdn: String,
    /// Current administrative lock flag
    pub locked: bool,
    /// Opaque WAPI object reference (`_ref`)
    pub reference: String,
    /// User holding the lock, when the grid reports one
    pub locked_by: Option<String>,
}

impl Zone {
    #[must_use]
    pub fn state(&self) -> LockState {
        LockState::from(self.locked)
    }

    /// Build a zone from one element of a WAPI `zone_auth` response.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneLockError::Parse`] if `fqdn`, `locked` or `_ref` is missing
    /// or has the wrong type.
    pub fn from_value(value: &Value) -> Result<Self, ZoneLockError> {
        let object = value
            .as_object()
            .ok_or_else(|| ZoneLockError::parse(format!("expected zone object, got {value}")))?;

        let reference = object
            .get("_ref")
            .and_then(Value::as_str)
            .ok_or_else(|| ZoneLockError::parse("zone object has no string '_ref' field"))?
            .to_string();

        let fqdn = object
            .get("fqdn")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ZoneLockError::parse(format!("zone {reference} has no string 'fqdn' field"))
            })?
            .to_string();

        let locked = object
            .get("locked")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                ZoneLockError::parse(format!("zone {fqdn} has no boolean 'locked' field"))
            })?;

        let locked_by = object
            .get("locked_by")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            fqdn,
            locked,
            reference,
            locked_by,
        })
    }

    /// Decode a whole `zone_auth` list response.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneLockError::Parse`] if the body is not an array or any
    /// element is not a valid zone.
    pub fn list_from_value(value: &Value) -> Result<Vec<Self>, ZoneLockError> {
        value
            .as_array()
            .ok_or_else(|| ZoneLockError::parse("expected a JSON array of zones"))?
            .iter()
            .map(Self::from_value)
            .collect()
    }
}

/// How a single zone was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneOutcome {
    /// Report only, nothing changed
    Reported,
    /// Already in the requested state, no call issued
    Unchanged,
    /// Lock state changed on the grid
    Changed,
    /// The mutation call failed
    Failed,
}

/// Result of applying a [`LockAction`] to one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneResult {
    pub fqdn: String,
    pub previous_state: LockState,
    pub new_state: LockState,
    pub outcome: ZoneOutcome,
    pub locked_by: Option<String>,
    pub error: Option<ZoneLockError>,
}

impl ZoneResult {
    pub(crate) fn unchanged(zone: &Zone, outcome: ZoneOutcome) -> Self {
        Self {
            fqdn: zone.fqdn.clone(),
            previous_state: zone.state(),
            new_state: zone.state(),
            outcome,
            locked_by: zone.locked_by.clone(),
            error: None,
        }
    }

    pub(crate) fn changed(zone: &Zone, new_state: LockState) -> Self {
        Self {
            fqdn: zone.fqdn.clone(),
            previous_state: zone.state(),
            new_state,
            outcome: ZoneOutcome::Changed,
            locked_by: None,
            error: None,
        }
    }

    pub(crate) fn failed(zone: &Zone, error: ZoneLockError) -> Self {
        Self {
            fqdn: zone.fqdn.clone(),
            previous_state: zone.state(),
            new_state: zone.state(),
            outcome: ZoneOutcome::Failed,
            locked_by: zone.locked_by.clone(),
            error: Some(error),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
#[path = "zone_tests.rs"]
mod zone_tests;
