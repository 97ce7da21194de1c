//! Status reconciliation
//!
//! Every poll tick fans out one status fetch per armed panel that has no fetch
//! outstanding. Each result is diffed against the panel's last applied status
//! and only a change produces log lines.

use pdeck_client::StatusSnapshot;
use pdeck_core::prelude::*;
use pdeck_core::{classify_status, is_started};

use crate::panel::PanelId;
use crate::state::AppState;

use super::PollTarget;

/// Armed panels due for a poll this tick, marked in flight.
///
/// Idle panels are never touched. A panel whose previous poll is still
/// outstanding is skipped.
pub fn collect_poll_targets(state: &mut AppState) -> Vec<PollTarget> {
    let mut targets = Vec::new();

    for panel in state.panels.iter_mut() {
        let Some(profile_id) = panel.profile_id.clone() else {
            continue;
        };
        if panel.is_polling() {
            trace!(
                "Panel {}: poll for {} still outstanding, skipping tick",
                panel.number(),
                profile_id
            );
            continue;
        }

        let run = panel.begin_poll();
        targets.push(PollTarget {
            panel: panel.id,
            run,
            profile_id,
        });
    }

    targets
}

/// Apply a successful status snapshot
pub fn apply_snapshot(
    state: &mut AppState,
    panel: PanelId,
    run: u64,
    profile_id: &str,
    snapshot: StatusSnapshot,
) {
    let Some(target) = state.panels.get_mut(panel) else {
        return;
    };
    target.finish_poll(run);

    if !target.is_current_run(run) {
        trace!(
            "Panel {}: discarding status of {} from run {} (now run {} of {:?})",
            target.number(),
            profile_id,
            run,
            target.run,
            target.profile_id
        );
        return;
    }

    target.badge = classify_status(&snapshot.status);

    if let Some(endpoint) = snapshot.debug_endpoint() {
        target.debug_endpoint = Some(endpoint);
    }
    if let Some(ws) = &snapshot.websocket {
        target.websocket = Some(ws.clone());
    }
    if let Some(started_at) = &snapshot.started_at {
        target.started_at = Some(started_at.clone());
    }

    if target.last_known_status.as_deref() == Some(snapshot.status.as_str()) {
        return;
    }

    debug!(
        "Panel {}: {} status {:?} → {:?}",
        target.number(),
        profile_id,
        target.last_known_status,
        snapshot.status
    );
    target.log.info(format!("status → {}", snapshot.status));

    if let Some(err) = &snapshot.error {
        target.log.error(format!("⚠️ {}", err));
    }
    if is_started(&snapshot.status) {
        if let Some(ws) = &snapshot.websocket {
            target.log.info(format!("🔌 WebSocket ready: {}", ws));
        }
    }

    target.last_known_status = Some(snapshot.status);
}

/// The backend does not know the profile yet. Nothing changes.
pub fn apply_not_found(state: &mut AppState, panel: PanelId, run: u64, profile_id: &str) {
    if let Some(target) = state.panels.get_mut(panel) {
        target.finish_poll(run);
        trace!("Panel {}: {} not found", target.number(), profile_id);
    }
}

/// A poll that failed in transport. Logged; badge and status are left alone.
pub fn apply_poll_failure(
    state: &mut AppState,
    panel: PanelId,
    run: u64,
    profile_id: &str,
    error: &str,
) {
    let Some(target) = state.panels.get_mut(panel) else {
        return;
    };
    target.finish_poll(run);

    if !target.is_current_run(run) {
        return;
    }
    warn!("Panel {}: poll of {} failed: {}", target.number(), profile_id, error);
    target.log.warn(format!("⚠️ Poll failed: {}", error));
}
