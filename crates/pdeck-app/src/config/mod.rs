//! Configuration file parsing for Profile Deck
//!
//! Settings live in `<config_dir>/profile-deck/config.toml`; command-line
//! flags override individual values.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, SettingsOverrides};
pub use types::*;
