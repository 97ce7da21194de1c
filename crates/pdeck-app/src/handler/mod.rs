//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `dispatch`: Operator actions (start, inject, clear) and their results
//! - `reconcile`: Poll tick fan-out and status snapshot reconciliation
//! - `keys`: Key event handlers for UI modes

pub(crate) mod dispatch;
pub(crate) mod keys;
pub(crate) mod reconcile;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use pdeck_client::InjectOptions;

use crate::message::Message;
use crate::panel::PanelId;

pub use update::update;

/// One panel to poll, with the run and profile the poll is issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTarget {
    pub panel: PanelId,
    pub run: u64,
    pub profile_id: String,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// `POST /start_profile` for a freshly armed panel
    Start { panel: PanelId, profile_id: String },

    /// `POST /inject` into the panel's current profile
    Inject {
        panel: PanelId,
        profile_id: String,
        options: InjectOptions,
    },

    /// Fetch status for every target concurrently, reporting each as it lands
    PollStatus { targets: Vec<PollTarget> },

    /// `GET /status` for the remote listing
    ListRemoteProfiles,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
