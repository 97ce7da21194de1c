//! Operator actions and the handling of their results
//!
//! Requests validate and update the panel synchronously, then hand the
//! network call to the event loop as an [`UpdateAction`]. Results are applied
//! to the panel they were issued for even if it has been re-armed since.

use pdeck_client::InjectStats;
use pdeck_core::prelude::*;
use pdeck_core::Badge;

use crate::panel::PanelId;
use crate::state::{Alert, AppState};

use super::UpdateAction;

/// Arm `panel` with `profile_id` and request the start.
///
/// A blank id is rejected before anything changes.
pub fn request_start(
    state: &mut AppState,
    panel: PanelId,
    profile_id: &str,
) -> Result<UpdateAction> {
    let profile_id = profile_id.trim();
    if profile_id.is_empty() {
        return Err(Error::validation("Profile ID is required"));
    }

    let target = state.panels.require_mut(panel)?;
    target.arm(profile_id);
    target.log.info(format!("▶️ Run profile: {}", profile_id));
    info!("Panel {}: starting profile {}", target.number(), profile_id);

    Ok(UpdateAction::Start {
        panel,
        profile_id: profile_id.to_string(),
    })
}

/// Request an inject into the panel's current profile.
///
/// A panel that never started a run is rejected with no side effects.
pub fn request_inject(state: &mut AppState, panel: PanelId) -> Result<UpdateAction> {
    let options = state.inject_options.clone();
    let target = state.panels.require_mut(panel)?;

    let Some(profile_id) = target.profile_id.clone() else {
        return Err(Error::precondition(format!(
            "{}: run a profile before injecting",
            target.title()
        )));
    };

    target.log.info(format!("💉 Inject script into {}", profile_id));
    info!("Panel {}: injecting into {}", target.number(), profile_id);

    Ok(UpdateAction::Inject {
        panel,
        profile_id,
        options,
    })
}

/// Empty the panel's log. Nothing else on the panel changes.
pub fn clear_log(state: &mut AppState, panel: PanelId) -> Result<()> {
    let target = state.panels.require_mut(panel)?;
    target.log.clear();
    debug!("Panel {}: log cleared", target.number());
    Ok(())
}

pub fn handle_start_completed(state: &mut AppState, panel: PanelId, profile_id: &str, message: &str) {
    let Some(target) = state.panels.get_mut(panel) else {
        return;
    };
    if !target.tracks(profile_id) {
        debug!(
            "Panel {}: late start ack for {} (now {:?})",
            target.number(),
            profile_id,
            target.profile_id
        );
    }
    target.log.info(format!("⏳ {}", message));
}

pub fn handle_start_failed(state: &mut AppState, panel: PanelId, profile_id: &str, error: &str) {
    let Some(target) = state.panels.get_mut(panel) else {
        return;
    };
    warn!("Panel {}: start of {} failed: {}", target.number(), profile_id, error);
    target.badge = Badge::start_error();
    target.log.error(format!("❌ Start failed: {}", error));
}

pub fn handle_inject_completed(
    state: &mut AppState,
    panel: PanelId,
    profile_id: &str,
    stats: &InjectStats,
) {
    let Some(target) = state.panels.get_mut(panel) else {
        return;
    };
    debug!("Panel {}: injected into {}: {:?}", target.number(), profile_id, stats);
    target.log.info(format!("✅ Injected → {}", stats.summary()));
}

pub fn handle_inject_failed(state: &mut AppState, panel: PanelId, profile_id: &str, error: &str) {
    let Some(target) = state.panels.get_mut(panel) else {
        return;
    };
    warn!("Panel {}: inject into {} failed: {}", target.number(), profile_id, error);
    target.badge = Badge::inject_error();
    target.log.error(format!("❌ Inject failed: {}", error));
}

/// Surface a rejected request to the operator
pub fn reject(state: &mut AppState, err: Error) {
    if err.is_user_prompt() {
        let title = match &err {
            Error::Validation { .. } => "Invalid input",
            Error::Precondition { .. } => "Not available",
            _ => "Unknown panel",
        };
        state.show_alert(Alert::new(title, err.to_string()));
    } else {
        error!("Request failed: {}", err);
    }
}
