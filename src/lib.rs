//! Profile Deck
//!
//! Multi-panel control client for remote browser-automation profiles. The
//! binary wires settings, the HTTP status client and the engine together, then
//! hands the engine to the TUI or to the headless NDJSON runner.

pub mod headless;
pub mod launch;

// Re-export main entry points
pub use launch::{run, LaunchOptions};
