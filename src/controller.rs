// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone lock reconciliation.
//!
//! The controller compares each zone's observed lock state with the requested
//! [`LockAction`] and only issues a mutation when the two differ, so `--lock`
//! and `--unlock` can be re-run safely.
//!
//! Zones are handled one at a time. A failure while resolving zones aborts the
//! run; a failure while changing one zone is recorded in that zone's
//! [`ZoneResult`] and the next zone is processed.

use crate::errors::ZoneLockError;
use crate::wapi::ZoneApi;
use crate::zone::{LockAction, Zone, ZoneOutcome, ZoneResult};
use tracing::{debug, error, info};

/// Resolve the zones to act on.
///
/// With a filter, exactly the named zone is looked up and a missing zone is an
/// error. Without one, every authoritative zone on the grid is returned, which
/// may be none at all.
///
/// # Errors
///
/// Returns [`ZoneLockError::NotFound`] if `zone_filter` names a zone the grid
/// does not have, or any error from the list call itself.
pub async fn resolve_zones(
    api: &dyn ZoneApi,
    zone_filter: Option<&str>,
) -> Result<Vec<Zone>, ZoneLockError> {
    let zones = api.list_zones(zone_filter).await?;

    if let Some(name) = zone_filter {
        if zones.is_empty() {
            return Err(ZoneLockError::NotFound {
                zone: name.to_string(),
            });
        }
    }

    debug!(count = zones.len(), filter = ?zone_filter, "Resolved zones");
    Ok(zones)
}

/// Apply `action` to each zone in order, returning one result per zone.
///
/// A mutation is issued only for zones that are not already in the target
/// state. [`LockAction::Report`] never mutates.
pub async fn apply_action(
    api: &dyn ZoneApi,
    zones: &[Zone],
    action: LockAction,
) -> Vec<ZoneResult> {
    let mut results = Vec::with_capacity(zones.len());

    for zone in zones {
        let Some(target) = action.target_state() else {
            results.push(ZoneResult::unchanged(zone, ZoneOutcome::Reported));
            continue;
        };

        if zone.state() == target {
            debug!(zone = %zone.fqdn, state = %target, "Zone already in requested state");
            results.push(ZoneResult::unchanged(zone, ZoneOutcome::Unchanged));
            continue;
        }

        info!(zone = %zone.fqdn, from = %zone.state(), to = %target, "Changing zone lock");
        match api.set_lock(zone, target).await {
            Ok(()) => results.push(ZoneResult::changed(zone, target)),
            Err(e) => {
                error!(zone = %zone.fqdn, error = %e, "Failed to change zone lock");
                results.push(ZoneResult::failed(zone, e));
            }
        }
    }

    results
}

/// Outcome counts for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reported: usize,
    pub unchanged: usize,
    pub changed: usize,
    pub failed: usize,
}

impl RunSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.reported + self.unchanged + self.changed + self.failed
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Count the outcomes in `results`.
#[must_use]
pub fn summarize(results: &[ZoneResult]) -> RunSummary {
    results
        .iter()
        .fold(RunSummary::default(), |mut summary, result| {
            match result.outcome {
                ZoneOutcome::Reported => summary.reported += 1,
                ZoneOutcome::Unchanged => summary.unchanged += 1,
                ZoneOutcome::Changed => summary.changed += 1,
                ZoneOutcome::Failed => summary.failed += 1,
            }
            summary
        })
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
