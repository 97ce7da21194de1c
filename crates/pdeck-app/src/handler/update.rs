//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;

use pdeck_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, RemoteListing, RemoteProfile};

use super::{dispatch, keys::handle_key, reconcile, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::PollTick => {
            let targets = reconcile::collect_poll_targets(state);
            if targets.is_empty() {
                UpdateResult::none()
            } else {
                trace!("Poll tick: {} panel(s)", targets.len());
                UpdateResult::action(UpdateAction::PollStatus { targets })
            }
        }

        // ─────────────────────────────────────────────────────────
        // Operator Actions
        // ─────────────────────────────────────────────────────────
        Message::RequestStart { panel, profile_id } => {
            match dispatch::request_start(state, panel, &profile_id) {
                Ok(action) => UpdateResult::action(action),
                Err(e) => {
                    dispatch::reject(state, e);
                    UpdateResult::none()
                }
            }
        }

        Message::RequestInject { panel } => match dispatch::request_inject(state, panel) {
            Ok(action) => UpdateResult::action(action),
            Err(e) => {
                dispatch::reject(state, e);
                UpdateResult::none()
            }
        },

        Message::ClearLog { panel } => {
            if let Err(e) = dispatch::clear_log(state, panel) {
                dispatch::reject(state, e);
            }
            UpdateResult::none()
        }

        Message::RequestRemoteList => {
            state.remote = RemoteListing::Loading;
            UpdateResult::action(UpdateAction::ListRemoteProfiles)
        }

        Message::SelectPanel(index) => {
            state.panels.select_by_index(index);
            UpdateResult::none()
        }

        Message::NextPanel => {
            state.panels.select_next();
            UpdateResult::none()
        }

        Message::PreviousPanel => {
            state.panels.select_previous();
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Profile ID Prompt
        // ─────────────────────────────────────────────────────────
        Message::OpenProfileInput => {
            let selected = state.panels.selected_index();
            state.open_profile_input(selected);
            UpdateResult::none()
        }

        Message::ProfileInputChar(c) => {
            state.input.buffer.push(c);
            UpdateResult::none()
        }

        Message::ProfileInputBackspace => {
            state.input.buffer.pop();
            UpdateResult::none()
        }

        Message::SubmitProfileInput => {
            let panel = state.input.target;
            let profile_id = std::mem::take(&mut state.input.buffer);
            state.close_profile_input();
            UpdateResult::message(Message::RequestStart { panel, profile_id })
        }

        Message::CancelProfileInput => {
            state.close_profile_input();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Start / Inject Results
        // ─────────────────────────────────────────────────────────
        Message::StartCompleted {
            panel,
            profile_id,
            message,
        } => {
            dispatch::handle_start_completed(state, panel, &profile_id, &message);
            UpdateResult::none()
        }

        Message::StartFailed {
            panel,
            profile_id,
            error,
        } => {
            dispatch::handle_start_failed(state, panel, &profile_id, &error);
            UpdateResult::none()
        }

        Message::InjectCompleted {
            panel,
            profile_id,
            stats,
        } => {
            dispatch::handle_inject_completed(state, panel, &profile_id, &stats);
            UpdateResult::none()
        }

        Message::InjectFailed {
            panel,
            profile_id,
            error,
        } => {
            dispatch::handle_inject_failed(state, panel, &profile_id, &error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Poll Results
        // ─────────────────────────────────────────────────────────
        Message::StatusPolled {
            panel,
            run,
            profile_id,
            snapshot,
        } => {
            reconcile::apply_snapshot(state, panel, run, &profile_id, snapshot);
            UpdateResult::none()
        }

        Message::StatusNotFound {
            panel,
            run,
            profile_id,
        } => {
            reconcile::apply_not_found(state, panel, run, &profile_id);
            UpdateResult::none()
        }

        Message::StatusPollFailed {
            panel,
            run,
            profile_id,
            error,
        } => {
            reconcile::apply_poll_failure(state, panel, run, &profile_id, &error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Remote Listing Results
        // ─────────────────────────────────────────────────────────
        Message::RemoteProfilesListed { profiles } => {
            debug!("Backend lists {} profile(s)", profiles.len());
            state.remote = RemoteListing::Loaded {
                profiles: profiles
                    .into_iter()
                    .map(|(id, snapshot)| RemoteProfile::from_snapshot(id, &snapshot))
                    .collect(),
                fetched_at: Local::now(),
            };
            UpdateResult::none()
        }

        Message::RemoteListFailed { error } => {
            warn!("Listing remote profiles failed: {}", error);
            state.remote = RemoteListing::Failed(error);
            UpdateResult::none()
        }
    }
}
