//! pdeck-tui - Terminal UI for Profile Deck
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from pdeck-app and adds terminal rendering, key polling, and the
//! panel grid widgets. Everything drawn comes from `pdeck_app::view`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
