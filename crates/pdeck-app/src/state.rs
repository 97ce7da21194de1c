//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use pdeck_client::{InjectOptions, StatusSnapshot};
use pdeck_core::{classify_status, Badge};

use crate::config::Settings;
use crate::panel::PanelId;
use crate::panel_manager::PanelManager;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Panel grid
    #[default]
    Normal,

    /// Typing a profile id for the selected panel
    ProfileInput,

    /// Blocking alert; only dismissal is accepted
    Alert,
}

/// A blocking message for the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Profile id prompt state
#[derive(Debug, Clone, Default)]
pub struct ProfileInputState {
    /// Panel the run will start on
    pub target: PanelId,
    pub buffer: String,
}

/// One entry of the backend's full profile listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProfile {
    pub profile_id: String,
    pub status: String,
    pub badge: Badge,
}

impl RemoteProfile {
    pub fn from_snapshot(profile_id: String, snapshot: &StatusSnapshot) -> Self {
        Self {
            badge: classify_status(&snapshot.status),
            status: snapshot.status.clone(),
            profile_id,
        }
    }
}

/// Result of the last "list remote profiles" request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemoteListing {
    #[default]
    NotLoaded,
    Loading,
    Loaded {
        profiles: Vec<RemoteProfile>,
        fetched_at: DateTime<Local>,
    },
    Failed(String),
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,

    /// The owned panel collection
    pub panels: PanelManager,

    /// Settings the session was started with
    pub settings: Settings,

    /// Script source attached to every inject
    pub inject_options: InjectOptions,

    pub input: ProfileInputState,

    /// Shown while `ui_mode == Alert`
    pub alert: Option<Alert>,

    pub remote: RemoteListing,

    quitting: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let panels = PanelManager::new(
            settings.panels.effective_count(),
            settings.panels.effective_max_log_lines(),
        );
        let inject_options =
            InjectOptions::new(&settings.inject.script_url, &settings.inject.inline_js);

        Self {
            ui_mode: UiMode::Normal,
            panels,
            settings,
            inject_options,
            input: ProfileInputState::default(),
            alert: None,
            remote: RemoteListing::NotLoaded,
            quitting: false,
        }
    }

    /// Open the blocking alert
    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Open the profile id prompt for `target`
    pub fn open_profile_input(&mut self, target: PanelId) {
        let buffer = self
            .panels
            .get(target)
            .and_then(|p| p.profile_id.clone())
            .unwrap_or_default();
        self.input = ProfileInputState { target, buffer };
        self.ui_mode = UiMode::ProfileInput;
    }

    pub fn close_profile_input(&mut self) {
        self.input.buffer.clear();
        if self.ui_mode == UiMode::ProfileInput {
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
