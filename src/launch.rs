//! Startup: settings resolution, client construction, front-end selection

use std::path::PathBuf;

use pdeck_app::config::{
    default_config_path, init_config_file, load_settings, Settings, SettingsOverrides,
};
use pdeck_app::Engine;
use pdeck_client::HttpStatusClient;
use pdeck_core::prelude::*;

use crate::headless;

/// What the command line asked for
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Explicit config file; the platform default otherwise
    pub config: Option<PathBuf>,
    pub overrides: SettingsOverrides,
    pub headless: bool,
}

/// Load the config file (writing a default one if missing) and apply CLI overrides
pub fn resolve_settings(options: &LaunchOptions) -> Settings {
    let path = options.config.clone().or_else(default_config_path);

    let mut settings = match path {
        Some(path) => {
            if let Err(e) = init_config_file(&path) {
                warn!("Could not create default config: {}", e);
            }
            load_settings(&path)
        }
        None => {
            warn!("No config directory on this platform, using defaults");
            Settings::default()
        }
    };

    options.overrides.apply(&mut settings);
    settings
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file: the TUI owns the terminal, headless owns stdout
    pdeck_core::logging::init()?;

    let settings = resolve_settings(&options);
    info!(
        "Backend {} | {} panel(s) | poll every {:?}",
        settings.remote.base_url,
        settings.panels.effective_count(),
        settings.polling.interval()
    );

    let client = HttpStatusClient::new(&settings.remote.base_url, settings.remote.timeout())?;
    let engine = Engine::new(settings, client);

    let result = if options.headless {
        headless::runner::run_headless(engine).await
    } else {
        pdeck_tui::run(engine).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Profile Deck exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_settings_writes_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let options = LaunchOptions {
            config: Some(path.clone()),
            ..Default::default()
        };

        let settings = resolve_settings(&options);
        assert!(path.exists());
        assert_eq!(settings.panels.effective_count(), 4);
    }

    #[test]
    fn test_cli_overrides_win_over_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[remote]\nbase_url = \"http://file:1\"\n[panels]\ncount = 2\n",
        )
        .unwrap();

        let options = LaunchOptions {
            config: Some(path),
            overrides: SettingsOverrides {
                base_url: Some("http://cli:2".into()),
                ..Default::default()
            },
            headless: true,
        };

        let settings = resolve_settings(&options);
        assert_eq!(settings.remote.base_url, "http://cli:2");
        assert_eq!(settings.panels.effective_count(), 2);
    }
}
