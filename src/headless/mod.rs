//! Headless mode - NDJSON event output and line commands on stdin
//!
//! Stdout carries one JSON object per line. Every object has an `event` field
//! naming its type. Panels are numbered from 1, as on screen.
//!
//! ```json
//! {"event":"ready","panels":4,"backend":"http://127.0.0.1:8080","timestamp":1704700001000}
//! {"event":"log_cleared","panel":1,"timestamp":1704700002000}
//! {"event":"log","panel":1,"level":"info","message":"▶️ Run profile: abc","timestamp":1704700002000}
//! {"event":"badge","panel":1,"kind":"running","text":"starting...","timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use pdeck_app::state::RemoteListing;
use pdeck_app::EngineEvent;
use pdeck_core::{BadgeKind, LogLevel, Result};

/// One entry of a `remote_profiles` event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteProfileEntry {
    pub profile_id: String,
    pub status: String,
    pub badge: BadgeKind,
}

/// Events written to stdout in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine is up and accepting commands
    Ready {
        panels: usize,
        backend: String,
        timestamp: i64,
    },

    /// Line appended to a panel log
    Log {
        panel: usize,
        level: LogLevel,
        message: String,
        timestamp: i64,
    },

    /// Panel log emptied
    LogCleared { panel: usize, timestamp: i64 },

    /// Panel badge changed
    Badge {
        panel: usize,
        kind: BadgeKind,
        text: String,
        timestamp: i64,
    },

    /// A command was rejected (the TUI shows these as a modal)
    Alert {
        title: String,
        message: String,
        timestamp: i64,
    },

    /// Remote listing changed
    RemoteProfiles {
        state: &'static str,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        profiles: Vec<RemoteProfileEntry>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        timestamp: i64,
    },

    /// A stdin line could not be understood
    Error { message: String, timestamp: i64 },

    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Serialize as a single NDJSON line (no trailing newline)
    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write this event to stdout and flush
    pub fn emit(&self) {
        let json = match self.to_line() {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(panels: usize, backend: impl Into<String>) -> Self {
        Self::Ready {
            panels,
            backend: backend.into(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event. Panel indices become 1-based.
    pub fn from_engine(event: &EngineEvent) -> Self {
        match event {
            EngineEvent::LogAppended { panel, entry } => Self::Log {
                panel: panel + 1,
                level: entry.level,
                message: entry.message.clone(),
                timestamp: entry.timestamp.timestamp_millis(),
            },
            EngineEvent::LogCleared { panel } => Self::LogCleared {
                panel: panel + 1,
                timestamp: Self::now(),
            },
            EngineEvent::BadgeChanged { panel, badge } => Self::Badge {
                panel: panel + 1,
                kind: badge.kind,
                text: badge.text.clone(),
                timestamp: Self::now(),
            },
            EngineEvent::AlertRaised { alert } => Self::Alert {
                title: alert.title.clone(),
                message: alert.message.clone(),
                timestamp: Self::now(),
            },
            EngineEvent::RemoteListingChanged { listing } => Self::remote_listing(listing),
            EngineEvent::Shutdown => Self::Shutdown {
                timestamp: Self::now(),
            },
        }
    }

    fn remote_listing(listing: &RemoteListing) -> Self {
        let (state, profiles, error) = match listing {
            RemoteListing::NotLoaded => ("not_loaded", Vec::new(), None),
            RemoteListing::Loading => ("loading", Vec::new(), None),
            RemoteListing::Failed(e) => ("failed", Vec::new(), Some(e.clone())),
            RemoteListing::Loaded { profiles, .. } => (
                "loaded",
                profiles
                    .iter()
                    .map(|p| RemoteProfileEntry {
                        profile_id: p.profile_id.clone(),
                        status: p.status.clone(),
                        badge: p.badge.kind,
                    })
                    .collect(),
                None,
            ),
        };

        Self::RemoteProfiles {
            state,
            profiles,
            error,
            timestamp: Self::now(),
        }
    }
}
