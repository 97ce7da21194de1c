//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use pdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "profile-deck";

const DEFAULT_CONFIG: &str = r#"# Profile Deck Configuration

[remote]
base_url = "http://127.0.0.1:8080"
# Overall request deadline in seconds. Unset = no deadline.
# timeout_secs = 20

[polling]
interval_ms = 2000      # Status poll interval (minimum 250)

[panels]
count = 4               # 1..=9
max_log_lines = 10000   # Oldest lines are dropped past this

[inject]
script_url = ""         # Empty = backend default script
inline_js = ""
"#;

/// `<config_dir>/profile-deck/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config if nothing exists at `config_path`
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Wrote default config to {:?}", config_path);
    Ok(())
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub interval_ms: Option<u64>,
    pub panels: Option<usize>,
}

impl SettingsOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.base_url {
            settings.remote.base_url = url.clone();
        }
        if let Some(ms) = self.interval_ms {
            settings.polling.interval_ms = ms;
        }
        if let Some(count) = self.panels {
            settings.panels.count = count;
        }
    }
}
