//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use pdeck_core::{Badge, LogEntry};

use crate::panel::PanelId;
use crate::state::{Alert, RemoteListing};

/// Domain events emitted by the Engine.
///
/// Within one panel, events arrive in the order the state changed.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A line was appended to a panel log
    LogAppended { panel: PanelId, entry: LogEntry },

    /// A panel log was emptied (explicit clear or a new run)
    LogCleared { panel: PanelId },

    /// A panel badge changed
    BadgeChanged { panel: PanelId, badge: Badge },

    /// A blocking alert was raised
    AlertRaised { alert: Alert },

    /// The remote profile listing changed
    RemoteListingChanged { listing: RemoteListing },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::LogAppended { .. } => "log",
            EngineEvent::LogCleared { .. } => "log_cleared",
            EngineEvent::BadgeChanged { .. } => "badge",
            EngineEvent::AlertRaised { .. } => "alert",
            EngineEvent::RemoteListingChanged { .. } => "remote_profiles",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
