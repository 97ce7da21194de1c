//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Smallest poll interval accepted, in milliseconds
pub const MIN_POLL_INTERVAL_MS: u64 = 250;

/// Upper bound on panel count (one per number key)
pub const MAX_PANELS: usize = 9;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub remote: RemoteSettings,

    #[serde(default)]
    pub polling: PollingSettings,

    #[serde(default)]
    pub panels: PanelSettings,

    #[serde(default)]
    pub inject: InjectSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RemoteSettings {
    /// Base URL of the profile backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request deadline. Unset keeps the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl RemoteSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

/// Status polling settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PollingSettings {
    /// Tick interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl PollingSettings {
    /// Tick interval, clamped to [`MIN_POLL_INTERVAL_MS`]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_POLL_INTERVAL_MS))
    }
}

fn default_interval_ms() -> u64 {
    2000
}

/// Panel layout and retention settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PanelSettings {
    /// Number of panels, 1..=9
    #[serde(default = "default_panel_count")]
    pub count: usize,

    /// Lines kept per panel log before the oldest are dropped
    #[serde(default = "default_max_log_lines")]
    pub max_log_lines: usize,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            count: default_panel_count(),
            max_log_lines: default_max_log_lines(),
        }
    }
}

impl PanelSettings {
    /// Panel count clamped to `1..=MAX_PANELS`
    pub fn effective_count(&self) -> usize {
        self.count.clamp(1, MAX_PANELS)
    }

    /// Log cap, never zero
    pub fn effective_max_log_lines(&self) -> usize {
        self.max_log_lines.max(1)
    }
}

fn default_panel_count() -> usize {
    4
}

fn default_max_log_lines() -> usize {
    10_000
}

/// Script source sent with inject requests
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InjectSettings {
    /// URL the backend fetches the script from (empty = unset)
    #[serde(default)]
    pub script_url: String,

    /// Inline JavaScript source (empty = unset)
    #[serde(default)]
    pub inline_js: String,
}
