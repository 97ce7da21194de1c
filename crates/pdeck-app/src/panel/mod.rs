//! Per-panel state: the tracked profile, its endpoints, badge and log

mod log_sink;
#[allow(clippy::module_inception)]
mod panel;


pub use log_sink::LogSink;
pub use panel::Panel;

/// Index of a panel in the grid (0-based)
pub type PanelId = usize;
