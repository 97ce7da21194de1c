//! Panel - per-slot profile tracking state

use pdeck_core::{Badge, DebugEndpoint};

use super::{LogSink, PanelId};

/// One panel: the profile it tracks, what the backend last told us about it,
/// and its event log.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Position in the panel grid (0-based)
    pub id: PanelId,

    /// Profile of the current run; `None` until the first start
    pub profile_id: Option<String>,

    /// Raw status of the last applied poll, for change detection only
    pub last_known_status: Option<String>,

    /// Set once reported, never unset until the next run
    pub debug_endpoint: Option<DebugEndpoint>,

    /// Set once reported, never unset until the next run
    pub websocket: Option<String>,

    /// Human-readable start time reported by the backend
    pub started_at: Option<String>,

    pub badge: Badge,

    pub log: LogSink,

    /// Bumped on every arm; poll results carry the run they were issued for
    pub run: u64,

    /// Run of the status poll currently outstanding, if any
    pub in_flight_poll: Option<u64>,
}

impl Panel {
    pub fn new(id: PanelId, max_log_lines: usize) -> Self {
        Self {
            id,
            profile_id: None,
            last_known_status: None,
            debug_endpoint: None,
            websocket: None,
            started_at: None,
            badge: Badge::idle(),
            log: LogSink::new(max_log_lines),
            run: 0,
            in_flight_poll: None,
        }
    }

    /// 1-based number shown to the operator
    pub fn number(&self) -> usize {
        self.id + 1
    }

    pub fn title(&self) -> String {
        format!("Panel {}", self.number())
    }

    /// A panel with a profile is polled every tick
    pub fn is_armed(&self) -> bool {
        self.profile_id.is_some()
    }

    pub fn is_polling(&self) -> bool {
        self.in_flight_poll.is_some()
    }

    /// Start tracking a new run of `profile_id`.
    ///
    /// Drops everything learned about the previous run, including its
    /// outstanding poll, and empties the log. A late result of the old poll
    /// no longer matches [`Panel::run`] and is discarded.
    pub fn arm(&mut self, profile_id: impl Into<String>) {
        self.profile_id = Some(profile_id.into());
        self.run += 1;
        self.in_flight_poll = None;
        self.last_known_status = None;
        self.debug_endpoint = None;
        self.websocket = None;
        self.started_at = None;
        self.log.clear();
        self.badge = Badge::starting();
    }

    /// Whether `profile_id` is the run this panel currently tracks
    pub fn tracks(&self, profile_id: &str) -> bool {
        self.profile_id.as_deref() == Some(profile_id)
    }

    /// Whether a poll issued for `run` still belongs to the current run
    pub fn is_current_run(&self, run: u64) -> bool {
        self.is_armed() && self.run == run
    }

    /// Mark a poll of the current run outstanding
    pub fn begin_poll(&mut self) -> u64 {
        self.in_flight_poll = Some(self.run);
        self.run
    }

    /// Clear the in-flight marker if it belongs to `run`
    pub fn finish_poll(&mut self, run: u64) {
        if self.in_flight_poll == Some(run) {
            self.in_flight_poll = None;
        }
    }
}
