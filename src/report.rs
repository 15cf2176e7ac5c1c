// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Human-readable rendering of zone results.
//!
//! Rendering is kept separate from the controller so results can be asserted
//! on directly and the binary only has to print the returned lines.

use crate::controller::summarize;
use crate::zone::{LockState, ZoneOutcome, ZoneResult};

/// Message printed when a run has no zones to show.
pub const NO_ZONES_MESSAGE: &str = "No matching zones found.";

/// Render one result as a single output line.
#[must_use]
pub fn format_result(result: &ZoneResult) -> String {
    let verb = |state: LockState| match state {
        LockState::Locked => "locked",
        LockState::Unlocked => "unlocked",
    };

    match result.outcome {
        ZoneOutcome::Reported => {
            let mut line = format!(
                "Zone: {}, Locked: {}",
                result.fqdn,
                result.previous_state.is_locked()
            );
            if result.previous_state.is_locked() {
                if let Some(user) = &result.locked_by {
                    line.push_str(&format!(", Locked by: {user}"));
                }
            }
            line
        }
        ZoneOutcome::Unchanged => {
            format!("Zone: {}, already {}", result.fqdn, verb(result.new_state))
        }
        ZoneOutcome::Changed => format!(
            "Zone: {}, {} (was {})",
            result.fqdn,
            verb(result.new_state),
            result.previous_state
        ),
        ZoneOutcome::Failed => {
            let wanted = match result.previous_state {
                LockState::Locked => "unlock",
                LockState::Unlocked => "lock",
            };
            let reason = result
                .error
                .as_ref()
                .map_or_else(|| "unknown error".to_string(), ToString::to_string);
            format!(
                "Zone: {}, FAILED to {wanted} (still {}): {reason}",
                result.fqdn, result.previous_state
            )
        }
    }
}

/// Render the failure summary, or `None` when every zone succeeded.
#[must_use]
pub fn format_failure_summary(results: &[ZoneResult]) -> Option<Vec<String>> {
    let summary = summarize(results);
    if !summary.has_failures() {
        return None;
    }

    let mut lines = vec![format!(
        "{} of {} zone(s) failed:",
        summary.failed,
        summary.total()
    )];
    lines.extend(
        results
            .iter()
            .filter(|result| result.is_failure())
            .filter_map(|result| {
                result
                    .error
                    .as_ref()
                    .map(|e| format!("  - {}: {}: {e}", result.fqdn, e.kind()))
            }),
    );
    Some(lines)
}

/// Render the full report: one line per zone, then any failure summary.
#[must_use]
pub fn render(results: &[ZoneResult]) -> Vec<String> {
    if results.is_empty() {
        return vec![NO_ZONES_MESSAGE.to_string()];
    }

    let mut lines: Vec<String> = results.iter().map(format_result).collect();
    if let Some(summary) = format_failure_summary(results) {
        lines.push(String::new());
        lines.extend(summary);
    }
    lines
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
