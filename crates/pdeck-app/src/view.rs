//! Pure projection of panel state into what a front end displays.
//!
//! Nothing here mutates state or knows about terminals, so both the TUI and
//! the headless runner render from the same view model.

use pdeck_core::{Badge, LogEntry, LogLevel};

use crate::panel::{Panel, PanelId};
use crate::state::{Alert, AppState, RemoteListing, UiMode};

/// One rendered log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// `HH:MM:SS`
    pub time: String,
    pub level: LogLevel,
    pub text: String,
}

impl From<&LogEntry> for LogLine {
    fn from(entry: &LogEntry) -> Self {
        Self {
            time: entry.formatted_time(),
            level: entry.level,
            text: entry.message.clone(),
        }
    }
}

/// Everything shown for one panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub id: PanelId,
    pub title: String,
    pub profile_id: Option<String>,
    pub badge: Badge,
    /// `host:port`
    pub debug_endpoint: Option<String>,
    pub websocket: Option<String>,
    pub started_at: Option<String>,
    pub log: Vec<LogLine>,
    /// Lines in the panel log, including those not rendered
    pub log_len: usize,
    /// Inject is only offered once a run exists
    pub can_inject: bool,
    pub polling: bool,
    pub selected: bool,
}

/// Profile id prompt, while open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub target_title: String,
    pub buffer: String,
}

/// The whole screen
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub panels: Vec<PanelView>,
    pub selected: PanelId,
    pub ui_mode: UiMode,
    pub alert: Option<Alert>,
    pub input: Option<InputView>,
    pub remote: RemoteListing,
    pub backend: String,
}

/// Render one panel with its full log
pub fn render(panel: &Panel) -> PanelView {
    render_tail(panel, usize::MAX)
}

/// Render one panel with at most the newest `max_log_lines` lines
pub fn render_tail(panel: &Panel, max_log_lines: usize) -> PanelView {
    PanelView {
        id: panel.id,
        title: panel.title(),
        profile_id: panel.profile_id.clone(),
        badge: panel.badge.clone(),
        debug_endpoint: panel.debug_endpoint.as_ref().map(|e| e.to_string()),
        websocket: panel.websocket.clone(),
        started_at: panel.started_at.clone(),
        log: panel.log.tail(max_log_lines).map(LogLine::from).collect(),
        log_len: panel.log.len(),
        can_inject: panel.is_armed(),
        polling: panel.is_polling(),
        selected: false,
    }
}

/// Render the full screen, keeping at most `max_log_lines` per panel
pub fn render_all(state: &AppState, max_log_lines: usize) -> ViewModel {
    let selected = state.panels.selected_index();
    let panels = state
        .panels
        .iter()
        .map(|p| {
            let mut view = render_tail(p, max_log_lines);
            view.selected = p.id == selected;
            view
        })
        .collect();

    let input = (state.ui_mode == UiMode::ProfileInput).then(|| InputView {
        target_title: state
            .panels
            .get(state.input.target)
            .map(|p| p.title())
            .unwrap_or_default(),
        buffer: state.input.buffer.clone(),
    });

    ViewModel {
        panels,
        selected,
        ui_mode: state.ui_mode,
        alert: state.alert.clone(),
        input,
        remote: state.remote.clone(),
        backend: state.settings.remote.base_url.clone(),
    }
}
